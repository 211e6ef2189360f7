//! Attribute values and expressions

use crate::error::{HclError, Result};

/// A literal attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Int(i64),
    /// Floating point number; integral values render without a fraction
    Float(f64),
    /// Quoted string
    String(String),
    /// Tuple/list of values
    List(Vec<Value>),
    /// Object with keys kept in insertion order
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build a list of strings
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    /// An empty list
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// Whether the value is a string, number or bool
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Object(_))
    }

    /// String content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Bool content, if this is a bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// List items, if this is a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A dotted reference to another resource, e.g. `signalfx_time_chart.sfx-abc.id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    segments: Vec<String>,
}

impl Traversal {
    /// Build a traversal from its segments; every segment must be an identifier
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(HclError::EmptyTraversal);
        }
        for segment in &segments {
            identifier(segment)?;
        }
        Ok(Self { segments })
    }

    /// Parse a dotted path
    pub fn parse(path: &str) -> Result<Self> {
        Self::new(path.split('.'))
    }

    /// Path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Multi-line string literal (`<<EOF ... EOF`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heredoc {
    content: String,
}

impl Heredoc {
    /// Wrap raw text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Raw text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Terminator that does not collide with any line of the content
    pub fn marker(&self) -> String {
        let taken = |m: &str| self.content.lines().any(|line| line.trim() == m);
        if !taken("EOF") {
            return "EOF".to_string();
        }
        (1..)
            .map(|n| format!("EOF_{n}"))
            .find(|m| !taken(m))
            .unwrap_or_else(|| "EOF".to_string())
    }
}

/// Right-hand side of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value
    Literal(Value),
    /// Bare reference
    Traversal(Traversal),
    /// Heredoc string
    Heredoc(Heredoc),
}

impl Expression {
    /// Literal value, if any
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Expression::Literal(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for Expression {
    fn from(v: Value) -> Self {
        Expression::Literal(v)
    }
}

impl From<Traversal> for Expression {
    fn from(t: Traversal) -> Self {
        Expression::Traversal(t)
    }
}

impl From<Heredoc> for Expression {
    fn from(h: Heredoc) -> Self {
        Expression::Heredoc(h)
    }
}

impl From<bool> for Expression {
    fn from(v: bool) -> Self {
        Expression::Literal(Value::Bool(v))
    }
}

impl From<i64> for Expression {
    fn from(v: i64) -> Self {
        Expression::Literal(Value::Int(v))
    }
}

impl From<f64> for Expression {
    fn from(v: f64) -> Self {
        Expression::Literal(Value::Float(v))
    }
}

impl From<&str> for Expression {
    fn from(v: &str) -> Self {
        Expression::Literal(Value::String(v.to_string()))
    }
}

impl From<String> for Expression {
    fn from(v: String) -> Self {
        Expression::Literal(Value::String(v))
    }
}

/// Validate `name` as an HCL identifier
pub(crate) fn identifier(name: &str) -> Result<hcl::Identifier> {
    hcl::Identifier::new(name.to_string()).map_err(|_| HclError::InvalidIdentifier(name.to_string()))
}
