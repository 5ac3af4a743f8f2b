//! dappin CLI
//!
//! Uploads one file to an IPFS daemon, pins it, and reads the block back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dappin_core::constants::{DEFAULT_UPLOAD_FIELD, DEFAULT_UPLOAD_PATH, ENV_API_URL};
use dappin_core::types::PinType;
use dappin_ipfs::{run_file, DaemonConfig, IpfsClient, RunOptions};

/// dappin - upload and pin a file on an IPFS daemon
#[derive(Debug, Parser)]
#[command(name = "dappin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to upload
    #[arg(default_value = DEFAULT_UPLOAD_PATH)]
    file: PathBuf,

    /// Daemon RPC base URL
    #[arg(long, env = ENV_API_URL)]
    api_url: Option<String>,

    /// Multipart field name for the upload
    #[arg(long, default_value = DEFAULT_UPLOAD_FIELD)]
    field: String,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// List pins after pinning (direct, recursive, indirect, all)
    #[arg(long, value_name = "TYPE", num_args = 0..=1, default_missing_value = "direct")]
    list_pins: Option<PinType>,

    /// Don't read the block back after pinning
    #[arg(long)]
    no_fetch: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Applies command-line overrides on top of env/default config.
    fn daemon_config(&self, mut config: DaemonConfig) -> DaemonConfig {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(seconds) = self.timeout {
            config.timeout_seconds = Some(seconds);
        }
        config
    }

    fn run_options(&self) -> RunOptions {
        RunOptions {
            list_pins: self.list_pins,
            fetch_block: !self.no_fetch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "dappin=debug,info"
    } else {
        "dappin=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.daemon_config(DaemonConfig::from_env().context("Invalid environment")?);
    let client = IpfsClient::with_config(config).context("Failed to create IPFS client")?;
    tracing::debug!(api_url = %client.base_url(), file = %cli.file.display(), "Publishing");

    let report = match run_file(&client, &cli.file, &cli.field, &cli.run_options()).await {
        Ok(report) => report,
        Err(e) => {
            if e.is_recoverable() {
                eprintln!(
                    "{} is the daemon at {} running?",
                    "⚠️ ".yellow().bold(),
                    client.base_url()
                );
            }
            return Err(e).with_context(|| format!("Failed to publish {}", cli.file.display()));
        }
    };

    println!("{}", report);

    if let Some(len) = report.block_len() {
        println!("{}", format!("block: {} bytes", len).dimmed());
    }

    Ok(())
}
