use std::fmt;

use crate::error::{Error, Result};
use crate::sys::IF_NAMESIZE;

/// An interface name encoded into the kernel's fixed, nul-terminated buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct InterfaceName {
    name: String,
    bytes: [u8; IF_NAMESIZE],
}

impl InterfaceName {
    pub const MAX_LEN: usize = IF_NAMESIZE - 1;

    pub fn new(name: &str) -> Result<InterfaceName> {
        let raw = name.as_bytes();
        if raw.len() > Self::MAX_LEN {
            return Err(Error::NameTooLong {
                name: name.to_string(),
                len: raw.len(),
                max: Self::MAX_LEN,
            });
        }
        if raw.contains(&0) {
            return Err(Error::NameContainsNul(name.to_string()));
        }

        let mut bytes = [0u8; IF_NAMESIZE];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(InterfaceName {
            name: name.to_string(),
            bytes,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8; IF_NAMESIZE] {
        &self.bytes
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InterfaceName({:?})", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name_is_nul_padded() {
        let name = InterfaceName::new("veth0").unwrap();
        assert_eq!(&name.as_bytes()[..5], b"veth0");
        assert!(name.as_bytes()[5..].iter().all(|b| *b == 0));
        assert_eq!(name.to_string(), "veth0");
    }

    #[test]
    fn test_name_length_boundary() {
        let longest = "a".repeat(15);
        let name = InterfaceName::new(&longest).unwrap();
        assert_eq!(name.as_bytes()[15], 0);

        let too_long = "a".repeat(16);
        match InterfaceName::new(&too_long) {
            Err(Error::NameTooLong { len, max, .. }) => {
                assert_eq!(len, 16);
                assert_eq!(max, 15);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_name_length_counts_bytes() {
        // é is two bytes, € is three
        assert!(InterfaceName::new("ééééééé").is_ok());
        assert!(InterfaceName::new("€€€€€€").is_err());
    }

    #[test]
    fn test_name_rejects_nul() {
        assert!(matches!(
            InterfaceName::new("eth\0x"),
            Err(Error::NameContainsNul(_))
        ));
    }
}
