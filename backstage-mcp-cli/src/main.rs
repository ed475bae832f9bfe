//! Command line entry point for the Backstage catalog MCP server
//!
//! Reads the catalog location from the environment, then serves the
//! catalog tools over stdio until the MCP client disconnects.

use std::process;

use anyhow::Context;
use clap::Parser;

use backstage_mcp_tools::catalog::CatalogConfig;
use backstage_mcp_tools::mcp::{run_stdio_server, CatalogServer};

mod exit_codes;
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// MCP server exposing the Backstage software catalog as agent tools.
///
/// Configuration comes from the environment: BACKSTAGE_API_BASE
/// (required) and BACKSTAGE_BEARER_TOKEN (optional).
#[derive(Debug, Parser)]
#[command(name = "backstage-mcp", version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Enable trace logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn configure_logging(cli: &Cli) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::TRACE
    } else if cli.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // stdout carries the MCP stream; all logging goes to stderr.
    registry()
        .with(EnvFilter::new(format!("rmcp=warn,{log_level}")))
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .init();
}

async fn run() -> anyhow::Result<()> {
    let config = CatalogConfig::from_env().context("catalog configuration is incomplete")?;
    tracing::info!("catalog API base: {}", config.base_url());

    let server = CatalogServer::new(config).context("failed to build catalog server")?;
    run_stdio_server(server)
        .await
        .context("stdio server terminated abnormally")?;

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    configure_logging(&cli);

    match run().await {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(error) => {
            tracing::error!("{error:#}");
            process::exit(EXIT_ERROR);
        }
    }
}
