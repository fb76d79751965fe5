//! Subcommands module for vpnhelper CLI
//!
//! This module contains all the subcommand implementations.

pub mod gateway;
pub mod network;

use crate::cli::output::OutputFormatter;
use vpnhelper::aws::AwsClients;
use vpnhelper::config::Config;

/// Common context shared between commands
pub struct CommandContext {
    /// Configuration
    pub config: Config,
    /// Output formatter
    pub output: OutputFormatter,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &crate::cli::Cli, config: Config) -> Self {
        let output = OutputFormatter::new(!cli.no_color, cli.is_json());

        Self {
            config,
            output,
        }
    }

    /// Build SDK clients from the effective AWS settings
    pub async fn clients(&self) -> AwsClients {
        AwsClients::load(&self.config.aws).await
    }

    /// Report a failed lookup and return the process exit code
    pub fn fail(&self, err: &vpnhelper::Error) -> i32 {
        tracing::debug!(api_error = err.is_api_error(), "Lookup failed: {:?}", err);
        self.output.error(&err.to_string());
        1
    }
}
