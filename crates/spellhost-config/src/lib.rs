use std::env;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::catalog::CatalogConfig;
use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;

pub mod auth;
pub mod catalog;
pub mod dictionary;
pub mod network;

pub use self::catalog::CatalogFormat;
pub use self::dictionary::DisplayLanguage;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,

    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_json = env::var("SPELLHOST_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            network: NetworkConfig::new(),
            dictionary: DictionaryConfig::default(),
            auth: AuthConfig::new(),
            catalog: CatalogConfig::default(),

            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_keeps_defaults() {
        let json = r#"{
            "network": { "mount": "spell" },
            "dictionary": { "include_system_paths": false, "additional_paths": ["/opt/dicts"] },
            "catalog": { "format": "bare" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.network.mount, "spell");
        assert!(!config.network.bind.is_empty());
        assert!(!config.dictionary.include_system_paths);
        assert_eq!(config.dictionary.additional_paths.len(), 1);
        assert_eq!(config.dictionary.display_language, DisplayLanguage::English);
        assert_eq!(config.catalog.format, CatalogFormat::Bare);
    }

    #[test]
    fn empty_profile_is_valid() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert!(config.dictionary.include_system_paths);
        assert_eq!(config.catalog.format, CatalogFormat::Envelope);
    }
}
