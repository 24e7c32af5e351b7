use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd};

use log::trace;
use nix::sys::socket::{socket, AddressFamily, SockFlag, SockType};

use crate::error::{Error, Result};
use crate::name::InterfaceName;
use crate::sys::{self, EthtoolIfreq, EthtoolValue};

/// A handle that ethtool requests for a named interface can be issued through.
pub trait EthtoolChannel {
    /// Issues one ethtool request. The kernel reads and fills `value` in
    /// place before this returns.
    fn ethtool(&mut self, interface: &InterfaceName, value: &mut EthtoolValue) -> Result<()>;

    /// Releases the channel.
    fn close(self) -> Result<()>;
}

/// An `AF_INET` datagram socket used only as the target of `SIOCETHTOOL`.
#[derive(Debug)]
pub struct EthtoolSocket {
    fd: OwnedFd,
}

impl EthtoolSocket {
    pub fn open() -> Result<EthtoolSocket> {
        let fd = socket(
            AddressFamily::Inet,
            SockType::Datagram,
            SockFlag::SOCK_CLOEXEC,
            None,
        )
        .map_err(Error::SocketOpen)?;
        trace!("opened ethtool control socket fd={}", fd.as_raw_fd());
        Ok(EthtoolSocket { fd })
    }
}

impl EthtoolChannel for EthtoolSocket {
    fn ethtool(&mut self, interface: &InterfaceName, value: &mut EthtoolValue) -> Result<()> {
        let cmd = value.cmd;
        let mut ifreq = EthtoolIfreq::new(interface.as_bytes(), value);
        unsafe { sys::ethtool(self.fd.as_raw_fd(), &mut ifreq) }.map_err(|errno| {
            Error::Ethtool {
                interface: interface.to_string(),
                cmd,
                errno,
            }
        })?;
        Ok(())
    }

    fn close(self) -> Result<()> {
        let fd = self.fd.into_raw_fd();
        trace!("closing ethtool control socket fd={}", fd);
        nix::unistd::close(fd).map_err(Error::SocketClose)
    }
}
