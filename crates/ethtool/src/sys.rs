use std::marker::PhantomData;
use std::mem::size_of;

use nix::ioctl_readwrite_bad;

pub const SIOCETHTOOL: libc::c_ulong = libc::SIOCETHTOOL;

/// Get TX hardware checksumming state (`struct ethtool_value`).
pub const ETHTOOL_GTXCSUM: u32 = 0x00000016;
/// Set TX hardware checksumming state (`struct ethtool_value`).
pub const ETHTOOL_STXCSUM: u32 = 0x00000017;

pub const IF_NAMESIZE: usize = libc::IF_NAMESIZE;

const IFREQ_PADDING: usize = size_of::<libc::ifreq>() - IF_NAMESIZE - size_of::<libc::uintptr_t>();

/// Mirrors `struct ethtool_value` from linux/ethtool.h.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthtoolValue {
    pub cmd: u32,
    pub data: u32,
}

impl EthtoolValue {
    pub fn get(cmd: u32) -> EthtoolValue {
        EthtoolValue { cmd, data: 0 }
    }

    pub fn set(cmd: u32, enabled: bool) -> EthtoolValue {
        EthtoolValue {
            cmd,
            data: if enabled { 1 } else { 0 },
        }
    }

    pub fn enabled(&self) -> bool {
        self.data != 0
    }
}

/// `struct ifreq` with `ifr_data` pointing at an [`EthtoolValue`].
///
/// The kernel copies a whole `struct ifreq` from userspace, so the tail is
/// padded out to the size of the platform definition.
#[repr(C)]
pub struct EthtoolIfreq<'a> {
    ifr_name: [libc::c_char; IF_NAMESIZE],
    ifr_data: libc::uintptr_t,
    _pad: [u8; IFREQ_PADDING],
    _value: PhantomData<&'a mut EthtoolValue>,
}

impl<'a> EthtoolIfreq<'a> {
    pub fn new(name: &[u8; IF_NAMESIZE], value: &'a mut EthtoolValue) -> EthtoolIfreq<'a> {
        let mut ifr_name = [0 as libc::c_char; IF_NAMESIZE];
        for (slot, byte) in ifr_name.iter_mut().zip(name.iter()) {
            *slot = *byte as libc::c_char;
        }
        EthtoolIfreq {
            ifr_name,
            ifr_data: value as *mut EthtoolValue as libc::uintptr_t,
            _pad: [0; IFREQ_PADDING],
            _value: PhantomData,
        }
    }

    pub fn name_bytes(&self) -> [u8; IF_NAMESIZE] {
        let mut bytes = [0u8; IF_NAMESIZE];
        for (slot, c) in bytes.iter_mut().zip(self.ifr_name.iter()) {
            *slot = *c as u8;
        }
        bytes
    }

    pub fn data_ptr(&self) -> libc::uintptr_t {
        self.ifr_data
    }
}

const _: () = assert!(size_of::<EthtoolValue>() == 8);
const _: () = assert!(size_of::<EthtoolIfreq<'static>>() == size_of::<libc::ifreq>());

ioctl_readwrite_bad!(ethtool, SIOCETHTOOL, EthtoolIfreq<'_>);
