// Display version information

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Display version information
#[derive(Default)]
pub struct VersionCommand;

impl VersionCommand {
    pub fn new() -> Self {
        Self
    }

    /// Get version information
    pub fn version_info(style: &OutputStyle) -> String {
        [
            style.header(&format!("sfx2tf v{}", env!("CARGO_PKG_VERSION"))),
            String::new(),
            style.key_value(
                "Profile",
                if cfg!(debug_assertions) { "debug" } else { "release" },
            ),
            style.key_value("Default API", sfx2tf_config::DEFAULT_API_URL),
        ]
        .join("\n")
    }
}

#[async_trait::async_trait]
impl Command for VersionCommand {
    async fn execute(&self) -> CliResult<()> {
        println!("{}", Self::version_info(&OutputStyle::default()));
        Ok(())
    }
}
