use log::{debug, info, trace, warn};

use crate::channel::{EthtoolChannel, EthtoolSocket};
use crate::error::Result;
use crate::name::InterfaceName;
use crate::sys::{EthtoolValue, ETHTOOL_GTXCSUM, ETHTOOL_STXCSUM};

/// Turns off transmit checksum offload on `interface`, leaving it alone if
/// it is already off.
pub fn disable_tx_checksum_offload(interface: &str) -> Result<()> {
    disable_tx_checksum_offload_with(interface, EthtoolSocket::open)
}

/// Same as [`disable_tx_checksum_offload`], issuing requests through the
/// channel produced by `open`. The channel is released exactly once on every
/// path; a failed release is logged and does not affect the result.
pub fn disable_tx_checksum_offload_with<C, F>(interface: &str, open: F) -> Result<()>
where
    C: EthtoolChannel,
    F: FnOnce() -> Result<C>,
{
    let name = InterfaceName::new(interface)?;
    let mut channel = scopeguard::guard(open()?, |channel| {
        if let Err(error) = channel.close() {
            warn!("failed to release ethtool channel for {}: {}", name, error);
        }
    });

    let mut value = EthtoolValue::get(ETHTOOL_GTXCSUM);
    channel.ethtool(&name, &mut value)?;
    trace!("tx checksum offload on {} reads {}", name, value.data);
    if !value.enabled() {
        debug!("tx checksum offload already disabled on {}", name);
        return Ok(());
    }

    let mut value = EthtoolValue::set(ETHTOOL_STXCSUM, false);
    channel.ethtool(&name, &mut value)?;
    info!("disabled tx checksum offload on {}", name);
    Ok(())
}
