use std::env;

use anyhow::{anyhow, Result};
use krataethtool::disable_tx_checksum_offload;

fn main() -> Result<()> {
    let interface = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: txoff <interface>"))?;
    disable_tx_checksum_offload(&interface)?;
    println!("tx checksum offload is off on {}", interface);
    Ok(())
}
