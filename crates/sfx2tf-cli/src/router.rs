// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sfx2tf_config::{AppConfig, ConfigManager, ConfigManagerTrait};
use tracing::debug;

use crate::commands::*;
use crate::error::CliResult;
use crate::logging::{init_logging, resolve_level};
use crate::settings::ExportSettings;

/// sfx2tf - export SignalFx resources as Terraform configuration
#[derive(Parser, Debug)]
#[command(name = "sfx2tf")]
#[command(bin_name = "sfx2tf")]
#[command(about = "Export SignalFx dashboards, charts and detectors as Terraform configuration")]
#[command(
    long_about = "sfx2tf: read SignalFx dashboards, charts and detectors over the REST API and write equivalent signalfx_* Terraform resources.\n\nQuick start:\n  sfx2tf import --token $TOKEN --dashboard DASHBOARD_ID > dashboard.tf\n  sfx2tf import --token $TOKEN --detector DETECTOR_ID -o detector.tf\n  sfx2tf serve --token $TOKEN --port 8080"
)]
#[command(version)]
#[command(author = "sfx2tf Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Config file (default: ~/.config/sfx2tf/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Connection flags shared by commands that talk to SignalFx
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// SignalFx org access token
    #[arg(short, long, env = "SFX2TF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// SignalFx API URL for your realm
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Prefix for emitted dashboard and detector names
    #[arg(long, value_name = "PREFIX")]
    pub name_prefix: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Export one dashboard (with its charts) or one detector
    #[command(about = "Export a dashboard or detector as Terraform configuration")]
    Import {
        #[command(flatten)]
        api: ApiArgs,

        /// Dashboard id, without URL
        #[arg(short, long, value_name = "ID", conflicts_with = "detector")]
        dashboard: Option<String>,

        /// Detector id, without URL
        #[arg(short = 'x', long, value_name = "ID")]
        detector: Option<String>,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Serve exports over HTTP
    #[command(about = "Start an HTTP server that exports resources on request")]
    Serve {
        #[command(flatten)]
        api: ApiArgs,

        /// Address to bind
        #[arg(short, long)]
        address: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version information
    #[command(about = "Show version information")]
    Version,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;

        let level = resolve_level(
            cli.verbose,
            cli.quiet,
            cli.log_level.as_deref(),
            &config.logging.level,
        );
        init_logging(cli.verbose, cli.quiet, level);

        Self::execute(&cli, &config).await
    }

    /// Load and validate configuration for this invocation
    pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
        let mut manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        let config = manager.load_config()?;
        manager.validate_config(&config)?;
        debug!("Configuration loaded from {}", manager.config_path().display());
        Ok(config)
    }

    /// Execute a command
    pub async fn execute(cli: &Cli, config: &AppConfig) -> CliResult<()> {
        match &cli.command {
            Commands::Import {
                api,
                dashboard,
                detector,
                output,
            } => {
                let target = ImportTarget::from_flags(dashboard.clone(), detector.clone())?;
                let exporter = Self::settings(config, api).exporter()?;
                let cmd = ImportCommand::new(exporter, target).with_output(output.clone());
                cmd.execute().await
            }
            Commands::Serve { api, address, port } => {
                let exporter = Self::settings(config, api).exporter()?;
                let cmd = ServeCommand::new(
                    exporter,
                    address.clone().unwrap_or_else(|| config.server.address.clone()),
                    port.unwrap_or(config.server.port),
                );
                cmd.execute().await
            }
            Commands::Version => VersionCommand::new().execute().await,
        }
    }

    fn settings(config: &AppConfig, api: &ApiArgs) -> ExportSettings {
        ExportSettings::from_config(config)
            .with_token(api.token.clone())
            .with_api_url(api.api_url.clone())
            .with_name_prefix(api.name_prefix.clone())
    }
}
