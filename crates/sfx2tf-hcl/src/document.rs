//! Top-level document

use tracing::debug;

use crate::{
    body::{Block, Body},
    error::{HclError, Result},
    lower,
};

/// A configuration document: an ordered root body of top-level blocks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    body: Body,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Root body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable root body
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Append a finished top-level block
    pub fn append_block(&mut self, block: Block) {
        debug!(
            "Appending block {} {}",
            block.ident(),
            block.labels().join(".")
        );
        self.body.append_block(block);
    }

    /// Top-level blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.body.blocks()
    }

    /// Number of top-level blocks
    pub fn block_count(&self) -> usize {
        self.body.blocks().count()
    }

    /// The document as an `hcl-rs` body
    pub fn to_hcl(&self) -> Result<hcl::Body> {
        lower::body(&self.body)
    }

    /// Serialize to HCL text with the `hcl-rs` formatter
    pub fn render(&self) -> Result<String> {
        hcl::format::to_string(&self.to_hcl()?).map_err(|e| HclError::Format(e.to_string()))
    }

    /// Serialize to HCL bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.render().map(String::into_bytes)
    }
}
