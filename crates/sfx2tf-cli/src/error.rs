// CLI error types

use sfx2tf_api::ApiError;
use sfx2tf_config::ConfigError;
use sfx2tf_export::ExportError;
use sfx2tf_hcl::HclError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("No SignalFx token provided")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Render error: {0}")]
    Render(#[from] HclError),

    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'sfx2tf --help' for usage information.",
                    message
                )
            }
            CliError::MissingToken => "No SignalFx token provided.\n\nPass --token, set SFX2TF_TOKEN, or add `token` to the [api] section of the config file.".to_string(),
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(e) => {
                format!("Configuration error: {}\n\nCheck ~/.config/sfx2tf/config.toml and SFX2TF_* variables.", e)
            }
            CliError::Api(e) => format!("SignalFx request failed: {}", e),
            CliError::Export(e) => format!("Export failed: {}", e),
            CliError::Render(e) => format!("Could not render the document: {}", e),
            CliError::Server(msg) => format!("Server error: {}", msg),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
