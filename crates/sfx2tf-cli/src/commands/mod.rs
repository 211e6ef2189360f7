// Command handlers for the sfx2tf CLI

pub mod import;
pub mod serve;
pub mod version;

pub use import::{ImportCommand, ImportTarget};
pub use serve::{router, ServeCommand};
pub use version::VersionCommand;

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}
