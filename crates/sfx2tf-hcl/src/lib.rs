#![warn(missing_docs)]

//! Structured HCL document writer
//!
//! The exporter builds documents out of blocks, attributes and expressions
//! through this crate's small ordered model; [`Document::render`] lowers the
//! model into `hcl-rs` structures and serializes them with `hcl::format`.
//! Output is deterministic: the same document always renders to the same
//! bytes.

pub mod body;
pub mod document;
pub mod error;
pub mod lower;
pub mod value;

pub use body::{Attribute, Block, Body, BodyItem};
pub use document::Document;
pub use error::{HclError, Result};
pub use value::{Expression, Heredoc, Traversal, Value};
