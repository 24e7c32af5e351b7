use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TxOffloadConfig {
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub strict: bool,
}

impl TxOffloadConfig {
    pub fn parse(content: &str) -> Result<TxOffloadConfig> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<TxOffloadConfig> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        TxOffloadConfig::parse(&content)
    }

    /// Appends `extra` interfaces, keeping the first occurrence of each name.
    pub fn merge_interfaces<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for interface in extra {
            let interface = interface.into();
            if !self.interfaces.contains(&interface) {
                self.interfaces.push(interface);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_defaults() {
        let config = TxOffloadConfig::parse("").unwrap();
        assert_eq!(config, TxOffloadConfig::default());
    }

    #[test]
    fn test_parse_fields() {
        let config = TxOffloadConfig::parse(
            r#"
            interfaces = ["vif1.0", "vif2.0"]
            strict = true
            "#,
        )
        .unwrap();
        assert_eq!(config.interfaces, vec!["vif1.0", "vif2.0"]);
        assert!(config.strict);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(matches!(
            TxOffloadConfig::parse("interfaces = 4"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_merge_keeps_order_and_drops_duplicates() {
        let mut config = TxOffloadConfig {
            interfaces: vec!["vif1.0".to_string()],
            strict: false,
        };
        config.merge_interfaces(["vif2.0", "vif1.0", "vif3.0", "vif2.0"]);
        assert_eq!(config.interfaces, vec!["vif1.0", "vif2.0", "vif3.0"]);
    }

    #[test]
    fn test_load() {
        let mut path = std::env::temp_dir();
        path.push(format!("krata-ethtool-{}.toml", Uuid::new_v4()));
        fs::write(&path, "interfaces = [\"veth0\"]\n").unwrap();
        let _delete_config = scopeguard::guard(path.clone(), |path| {
            let _ = fs::remove_file(path);
        });

        let config = TxOffloadConfig::load(&path).unwrap();
        assert_eq!(config.interfaces, vec!["veth0"]);
        assert!(!config.strict);
    }

    #[test]
    fn test_load_missing_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("krata-ethtool-{}.toml", Uuid::new_v4()));
        let error = TxOffloadConfig::load(&path).unwrap_err();
        assert!(matches!(error, Error::ConfigRead { .. }));
        assert_eq!(error.errno(), Some(nix::errno::Errno::ENOENT));
    }
}
