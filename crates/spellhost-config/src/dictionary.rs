use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_include_system_paths() -> bool {
    true
}

/// Language the locale database renders display names in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayLanguage {
    /// "German (Austria)"
    #[default]
    English,
    /// "Deutsch (Austria)", falls back to English where no autonym is known
    Native,
}

/// Per-user and shared data directories, most specific first.
///
/// `SPELLHOST_DICTIONARY_PATHS` entries come before the XDG locations.
pub fn default_data_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(extra) = env::var_os("SPELLHOST_DICTIONARY_PATHS") {
        paths.extend(env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
    }

    let user_data = env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")));
    if let Some(dir) = user_data {
        paths.push(dir.join("spellhost").join("dictionaries"));
    }

    if cfg!(unix) {
        paths.push(PathBuf::from("/usr/local/share/spellhost/dictionaries"));
        paths.push(PathBuf::from("/usr/share/spellhost/dictionaries"));
    }

    paths
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Application data directories, scanned before the system ones
    #[serde(default = "default_data_paths")]
    pub data_paths: Vec<PathBuf>,
    #[serde(default)]
    pub additional_paths: Vec<PathBuf>,
    /// Also scan the well-known OS dictionary directories
    #[serde(default = "default_include_system_paths")]
    pub include_system_paths: bool,
    #[serde(default)]
    pub display_language: DisplayLanguage,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            data_paths: default_data_paths(),
            additional_paths: vec![],
            include_system_paths: default_include_system_paths(),
            display_language: DisplayLanguage::default(),
        }
    }
}
