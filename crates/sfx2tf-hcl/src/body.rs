//! Blocks and block bodies

use crate::value::{Expression, Heredoc, Traversal};

/// A `key = expression` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name
    pub key: String,
    /// Attribute expression
    pub expr: Expression,
}

/// One entry of a body, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    /// Attribute
    Attribute(Attribute),
    /// Nested block
    Block(Block),
}

/// Ordered contents of a block (or of the document root)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    items: Vec<BodyItem>,
}

impl Body {
    /// Create an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing one with the same key in place
    pub fn set_attribute(&mut self, key: impl Into<String>, expr: impl Into<Expression>) -> &mut Self {
        let key = key.into();
        let expr = expr.into();
        let existing = self.items.iter_mut().find_map(|item| match item {
            BodyItem::Attribute(attr) if attr.key == key => Some(attr),
            _ => None,
        });

        match existing {
            Some(attr) => attr.expr = expr,
            None => self.items.push(BodyItem::Attribute(Attribute { key, expr })),
        }
        self
    }

    /// Set an attribute only when a value is present
    pub fn set_optional<E: Into<Expression>>(
        &mut self,
        key: impl Into<String>,
        expr: Option<E>,
    ) -> &mut Self {
        if let Some(expr) = expr {
            self.set_attribute(key, expr);
        }
        self
    }

    /// Set a bare reference attribute
    pub fn set_traversal(&mut self, key: impl Into<String>, traversal: Traversal) -> &mut Self {
        self.set_attribute(key, Expression::Traversal(traversal))
    }

    /// Set a heredoc attribute
    pub fn set_heredoc(&mut self, key: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.set_attribute(key, Expression::Heredoc(Heredoc::new(content)))
    }

    /// Append a nested block
    pub fn append_block(&mut self, block: Block) -> &mut Self {
        self.items.push(BodyItem::Block(block));
        self
    }

    /// Append a new empty nested block and return its body for filling in
    pub fn append_new_block(&mut self, ident: impl Into<String>, labels: Vec<String>) -> &mut Body {
        self.items.push(BodyItem::Block(Block::new(ident, labels)));
        match self.items.last_mut() {
            Some(BodyItem::Block(block)) => block.body_mut(),
            _ => unreachable!("block was just pushed"),
        }
    }

    /// Look up an attribute expression by key
    pub fn attribute(&self, key: &str) -> Option<&Expression> {
        self.attributes()
            .find(|attr| attr.key == key)
            .map(|attr| &attr.expr)
    }

    /// Whether an attribute with this key is set
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some()
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter().filter_map(|item| match item {
            BodyItem::Attribute(attr) => Some(attr),
            _ => None,
        })
    }

    /// Attribute keys in document order
    pub fn attribute_keys(&self) -> Vec<&str> {
        self.attributes().map(|attr| attr.key.as_str()).collect()
    }

    /// Nested blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(|item| match item {
            BodyItem::Block(block) => Some(block),
            _ => None,
        })
    }

    /// Nested blocks with the given block type
    pub fn blocks_of_type<'a>(&'a self, ident: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks().filter(move |block| block.ident() == ident)
    }

    /// All items in document order
    pub fn items(&self) -> &[BodyItem] {
        &self.items
    }

    /// Whether the body has no attributes and no blocks
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A block: type identifier, zero or more quoted labels and a body
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    ident: String,
    labels: Vec<String>,
    body: Body,
}

impl Block {
    /// Create an empty block
    pub fn new(ident: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            ident: ident.into(),
            labels,
            body: Body::new(),
        }
    }

    /// Create a block around an existing body
    pub fn with_body(ident: impl Into<String>, labels: Vec<String>, body: Body) -> Self {
        Self {
            ident: ident.into(),
            labels,
            body,
        }
    }

    /// Block type, e.g. `resource`
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Block labels, e.g. `["signalfx_dashboard", "sfx-abc"]`
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Block body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable block body
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
