//! vpnhelper - resolve AWS networking identifiers for VPN automation
//!
//! This is the main entry point for the vpnhelper CLI.

mod cli;

use anyhow::Result;
use cli::commands::CommandContext;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vpnhelper::config::{Config, LogFormat, LoggingConfig};

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the log format can come from it
    let (mut config, config_error) = match Config::load(cli.config.as_ref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    cli.apply_overrides(&mut config);

    init_logging(cli.verbosity(), &config.logging);
    tracing::debug!("vpnhelper v{}", VERSION);

    let mut ctx = CommandContext::new(&cli, config);

    if let Some(e) = config_error {
        ctx.output
            .warning(&format!("Failed to load config, using defaults: {:#}", e));
    }

    let exit_code = match &cli.command {
        Commands::VpcIds(args) => args.execute(&mut ctx).await?,
        Commands::RouteTables(args) => args.execute(&mut ctx).await?,
        Commands::GatewayConfig(args) => args.execute(&mut ctx).await?,
    };

    ctx.output.flush();
    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level and configured format.
///
/// `RUST_LOG` takes precedence over both.
fn init_logging(verbosity: u8, logging: &LoggingConfig) {
    let filter = match verbosity {
        0 => logging.level.as_deref().unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match logging.format {
        LogFormat::Plain => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity >= 3),
            )
            .with(env_filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init(),
    }
}
