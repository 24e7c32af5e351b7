use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Env;
use krataethtool::config::TxOffloadConfig;
use krataethtool::disable_tx_checksum_offload;
use log::{info, warn};

/// Disable transmit checksum offload on network interfaces.
#[derive(Parser, Debug)]
struct TxOffArgs {
    /// Config file listing interfaces
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Exit with an error if any interface could not be updated
    #[arg(long)]
    strict: bool,
    /// Interfaces to update, in addition to those in the config file
    interfaces: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = TxOffArgs::parse();

    let mut config = match args.config {
        Some(ref path) => TxOffloadConfig::load(path)?,
        None => TxOffloadConfig::default(),
    };
    config.merge_interfaces(args.interfaces);
    config.strict |= args.strict;

    if config.interfaces.is_empty() {
        return Err(anyhow!("no interfaces specified"));
    }

    let mut failed = 0usize;
    for interface in &config.interfaces {
        if let Err(error) = disable_tx_checksum_offload(interface) {
            warn!(
                "failed to disable tx checksum offload on {}: {}",
                interface, error
            );
            failed += 1;
        }
    }

    info!(
        "processed {} interfaces, {} failed",
        config.interfaces.len(),
        failed
    );
    if config.strict && failed > 0 {
        return Err(anyhow!(
            "tx checksum offload could not be disabled on {} interfaces",
            failed
        ));
    }
    Ok(())
}
