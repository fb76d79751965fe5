//! CLI module for vpnhelper
//!
//! This module provides the command-line interface, including argument
//! parsing, configuration overrides, and subcommand handling.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vpnhelper::config::Config;

/// vpnhelper - resolve VPC, route table and customer gateway identifiers
#[derive(Parser, Debug, Clone)]
#[command(name = "vpnhelper")]
#[command(author = "vpnhelper Contributors")]
#[command(version)]
#[command(about = "Resolve AWS networking identifiers for VPN automation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Custom AWS endpoint URL
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain values, one per line
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the distinct VPC ids of a set of instances
    #[command(name = "vpc-ids")]
    VpcIds(commands::network::VpcIdsArgs),

    /// Find the tagged public and private route tables of a VPC
    #[command(name = "route-tables")]
    RouteTables(commands::network::RouteTablesArgs),

    /// Print the VPN configuration of a customer gateway from a CloudFormation stack
    #[command(name = "gateway-config")]
    GatewayConfig(commands::gateway::GatewayConfigArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }

    /// Check if JSON output is requested
    pub fn is_json(&self) -> bool {
        matches!(self.output, OutputFormat::Json)
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(region) = &self.region {
            config.aws.region = Some(region.clone());
        }
        if let Some(profile) = &self.profile {
            config.aws.profile = Some(profile.clone());
        }
        if let Some(endpoint) = &self.endpoint_url {
            config.aws.endpoint_url = Some(endpoint.clone());
        }
    }
}
