//! nextgric slice-control xApp
//!
//! Assembles an E2SM-RC "Slice-level PRB quota" control request (RIC
//! control style 2, action 6, header and message format 1) and dispatches
//! it to every connected E2 node. Per-slice dedicated PRB ratios are taken
//! from `SLICE1_RATIO` / `SLICE2_RATIO` (defaults 20:80).
//!
//! # Usage
//!
//! ```bash
//! SLICE1_RATIO=30 SLICE2_RATIO=70 nr-xapp-slice -c config/xapp.yaml
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use nextgric_common::{init_logging, load_xapp_config, LogLevel, XappConfig};
use nextgric_xapp::{SimConnection, XappDriver};

/// nextgric xApp - slice-level PRB quota control
#[derive(Parser, Debug)]
#[command(name = "nr-xapp-slice")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the xApp configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'v', long = "log-level", default_value = "info")]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run_xapp(args).await {
        Ok(()) => {
            info!("xApp run successful");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("xApp failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main xApp execution logic
async fn run_xapp(args: Args) -> Result<()> {
    let config = match &args.config_file {
        Some(path) => load_xapp_config(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => XappConfig::default(),
    };
    info!(
        ric = %format!("{}:{}", config.ric.address, config.ric.port),
        nodes = config.e2_nodes.len(),
        "configuration loaded"
    );

    let connection = SimConnection::from_config(&config);
    let mut driver = XappDriver::new(connection);
    driver.run().await.context("control cycle failed")?;

    Ok(())
}
