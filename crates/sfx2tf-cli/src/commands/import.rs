//! Import command - export one dashboard or detector as HCL

use std::{fmt, io::Write, path::PathBuf};

use async_trait::async_trait;
use sfx2tf_export::Exporter;
use tracing::info;

use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output;

/// What to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    Dashboard(String),
    Detector(String),
}

impl ImportTarget {
    /// Pick the target from the `--dashboard` / `--detector` pair
    pub fn from_flags(dashboard: Option<String>, detector: Option<String>) -> CliResult<Self> {
        let non_empty = |id: Option<String>| id.filter(|id| !id.trim().is_empty());
        match (non_empty(dashboard), non_empty(detector)) {
            (Some(id), None) => Ok(ImportTarget::Dashboard(id)),
            (None, Some(id)) => Ok(ImportTarget::Detector(id)),
            (Some(_), Some(_)) => Err(CliError::InvalidArgument {
                message: "choose either --dashboard or --detector, not both".to_string(),
            }),
            (None, None) => Err(CliError::InvalidArgument {
                message: "a dashboard or detector id is required".to_string(),
            }),
        }
    }
}

impl fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportTarget::Dashboard(id) => write!(f, "dashboard {}", id),
            ImportTarget::Detector(id) => write!(f, "detector {}", id),
        }
    }
}

/// Import command handler
pub struct ImportCommand {
    exporter: Exporter,
    target: ImportTarget,
    output: Option<PathBuf>,
}

impl ImportCommand {
    pub fn new(exporter: Exporter, target: ImportTarget) -> Self {
        Self {
            exporter,
            target,
            output: None,
        }
    }

    /// Write to a file instead of stdout
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Fetch and render the target
    pub async fn render(&self) -> CliResult<String> {
        let document = match &self.target {
            ImportTarget::Dashboard(id) => self.exporter.export_dashboard(id).await?,
            ImportTarget::Detector(id) => self.exporter.export_detector(id).await?,
        };
        Ok(document.render()?)
    }
}

#[async_trait]
impl Command for ImportCommand {
    async fn execute(&self) -> CliResult<()> {
        let text = self.render().await?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, text.as_bytes()).await?;
                info!("Wrote {} bytes to {}", text.len(), path.display());
                output::print_success(&format!("Exported {} to {}", self.target, path.display()));
            }
            None => {
                let mut stdout = std::io::stdout();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_flags() {
        assert_eq!(
            ImportTarget::from_flags(Some("D1".into()), None).unwrap(),
            ImportTarget::Dashboard("D1".into())
        );
        assert_eq!(
            ImportTarget::from_flags(None, Some("X1".into())).unwrap(),
            ImportTarget::Detector("X1".into())
        );
    }

    #[test]
    fn test_target_requires_exactly_one() {
        let both = ImportTarget::from_flags(Some("D1".into()), Some("X1".into()));
        assert!(matches!(both, Err(CliError::InvalidArgument { .. })));

        let neither = ImportTarget::from_flags(None, Some(" ".into()));
        assert!(matches!(neither, Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn test_target_display() {
        assert_eq!(ImportTarget::Detector("X1".into()).to_string(), "detector X1");
    }
}
