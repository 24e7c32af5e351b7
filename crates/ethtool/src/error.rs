use std::{io, path::PathBuf};

use nix::errno::Errno;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("interface name {name:?} is {len} bytes, at most {max} fit")]
    NameTooLong { name: String, len: usize, max: usize },
    #[error("interface name {0:?} contains a nul byte")]
    NameContainsNul(String),
    #[error("failed to open control socket: {0}")]
    SocketOpen(Errno),
    #[error("ethtool command {cmd:#x} on {interface} failed: {errno}")]
    Ethtool {
        interface: String,
        cmd: u32,
        errno: Errno,
    },
    #[error("failed to close control socket: {0}")]
    SocketClose(Errno),
    #[error("failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// The raw OS error code behind this error, if the kernel produced one.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Error::SocketOpen(errno)
            | Error::SocketClose(errno)
            | Error::Ethtool { errno, .. } => Some(*errno),
            Error::ConfigRead { source, .. } => source.raw_os_error().map(Errno::from_raw),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
