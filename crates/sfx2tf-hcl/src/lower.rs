//! Translation into `hcl-rs` structures
//!
//! Quoting, template escaping and layout are left to `hcl::format`; this
//! module only checks what the formatter cannot (identifiers, finite numbers)
//! and keeps integral floats integral.

use hcl::expr::{Heredoc as HclHeredoc, TemplateExpr, Traversal as HclTraversal, Variable};
use hcl::{BlockLabel, Number, Object, ObjectKey, Structure};

use crate::{
    body::{Block, Body, BodyItem},
    error::{HclError, Result},
    value::{identifier, Expression, Heredoc, Traversal, Value},
};

/// Largest magnitude at which an integral float is written as an integer
const MAX_EXACT_INTEGER: f64 = 1e15;

/// Lower a body and everything nested in it
pub fn body(body: &Body) -> Result<hcl::Body> {
    Ok(hcl::Body::builder().add_structures(structures(body)?).build())
}

fn structures(body: &Body) -> Result<Vec<Structure>> {
    body.items().iter().map(structure).collect()
}

fn structure(item: &BodyItem) -> Result<Structure> {
    Ok(match item {
        BodyItem::Attribute(attr) => Structure::Attribute(hcl::Attribute::new(
            identifier(&attr.key)?,
            expression(&attr.key, &attr.expr)?,
        )),
        BodyItem::Block(nested) => Structure::Block(block(nested)?),
    })
}

/// Lower one block; labels are always written quoted
pub fn block(block: &Block) -> Result<hcl::Block> {
    let labels = block
        .labels()
        .iter()
        .map(|label| BlockLabel::String(label.clone()));
    Ok(hcl::Block::builder(identifier(block.ident())?)
        .add_labels(labels)
        .add_structures(structures(block.body())?)
        .build())
}

fn expression(key: &str, expr: &Expression) -> Result<hcl::Expression> {
    match expr {
        Expression::Literal(value) => literal(key, value),
        Expression::Traversal(path) => traversal(path),
        Expression::Heredoc(doc) => heredoc(doc),
    }
}

fn literal(key: &str, value: &Value) -> Result<hcl::Expression> {
    Ok(match value {
        Value::Bool(b) => hcl::Expression::Bool(*b),
        Value::Int(i) => hcl::Expression::Number(Number::from(*i)),
        Value::Float(f) => hcl::Expression::Number(number(key, *f)?),
        Value::String(s) => hcl::Expression::String(s.clone()),
        Value::List(items) => hcl::Expression::Array(
            items
                .iter()
                .map(|item| literal(key, item))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(fields) => hcl::Expression::Object(
            fields
                .iter()
                .map(|(field, item)| Ok((object_key(field), literal(field, item)?)))
                .collect::<Result<Object<ObjectKey, hcl::Expression>>>()?,
        ),
    })
}

fn number(key: &str, f: f64) -> Result<Number> {
    let non_finite = || HclError::NonFiniteNumber {
        key: key.to_string(),
    };
    if !f.is_finite() {
        return Err(non_finite());
    }
    if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        return Ok(Number::from(f as i64));
    }
    Number::from_f64(f).ok_or_else(non_finite)
}

fn object_key(field: &str) -> ObjectKey {
    match identifier(field) {
        Ok(ident) => ObjectKey::Identifier(ident),
        Err(_) => ObjectKey::Expression(hcl::Expression::String(field.to_string())),
    }
}

fn traversal(path: &Traversal) -> Result<hcl::Expression> {
    let (root, rest) = path
        .segments()
        .split_first()
        .ok_or(HclError::EmptyTraversal)?;
    let root = Variable::new(root.clone())
        .map_err(|_| HclError::InvalidIdentifier(root.clone()))?;

    let mut builder = HclTraversal::builder(root);
    for segment in rest {
        builder = builder.attr(identifier(segment)?);
    }
    Ok(hcl::Expression::from(builder.build()))
}

fn heredoc(doc: &Heredoc) -> Result<hcl::Expression> {
    let mut text = doc.content().to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let delimiter = identifier(&doc.marker())?;
    let template = TemplateExpr::Heredoc(HclHeredoc::new(delimiter, text));
    Ok(hcl::Expression::TemplateExpr(Box::new(template)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_attribute(body: &hcl::Body) -> &hcl::Attribute {
        body.attributes().next().unwrap()
    }

    #[test]
    fn test_integral_float_becomes_integer() {
        assert_eq!(number("gte", 5.0).unwrap(), Number::from(5i64));
        assert_eq!(number("gte", -2.0).unwrap(), Number::from(-2i64));
        assert_eq!(number("gte", 2.5).unwrap(), Number::from_f64(2.5).unwrap());
        assert_eq!(
            number("gte", f64::NAN),
            Err(HclError::NonFiniteNumber {
                key: "gte".to_string()
            })
        );
    }

    #[test]
    fn test_traversal_is_a_reference() {
        let mut source = Body::new();
        source.set_traversal("chart_id", Traversal::parse("signalfx_text_chart.sfx-x.id").unwrap());
        let lowered = body(&source).unwrap();

        match &only_attribute(&lowered).expr {
            hcl::Expression::Traversal(t) => assert_eq!(t.operators.len(), 2),
            other => panic!("expected a traversal, got {:?}", other),
        }
    }

    #[test]
    fn test_heredoc_gets_trailing_newline() {
        let mut source = Body::new();
        source.set_heredoc("program_text", "A = data('cpu').publish()");
        let lowered = body(&source).unwrap();

        match &only_attribute(&lowered).expr {
            hcl::Expression::TemplateExpr(t) => match t.as_ref() {
                TemplateExpr::Heredoc(h) => {
                    assert_eq!(h.delimiter.as_str(), "EOF");
                    assert_eq!(h.template, "A = data('cpu').publish()\n");
                }
                other => panic!("expected a heredoc, got {:?}", other),
            },
            other => panic!("expected a template, got {:?}", other),
        }
    }

    #[test]
    fn test_object_keys() {
        assert!(matches!(object_key("gte"), ObjectKey::Identifier(_)));
        assert!(matches!(object_key("not an ident"), ObjectKey::Expression(_)));
    }

    #[test]
    fn test_invalid_attribute_key() {
        let mut source = Body::new();
        source.set_attribute("bad key", true);
        assert_eq!(
            body(&source).unwrap_err(),
            HclError::InvalidIdentifier("bad key".to_string())
        );
    }

    #[test]
    fn test_block_labels_are_strings() {
        let lowered = block(&Block::new(
            "resource",
            vec!["signalfx_list_chart".into(), "sfx-a".into()],
        ))
        .unwrap();
        assert_eq!(lowered.identifier.as_str(), "resource");
        assert_eq!(
            lowered.labels,
            vec![
                BlockLabel::String("signalfx_list_chart".into()),
                BlockLabel::String("sfx-a".into())
            ]
        );
        assert_eq!(lowered.body.attributes().count() + lowered.body.blocks().count(), 0);
    }
}
