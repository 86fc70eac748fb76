use std::env;

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    env::var("SPELLHOST_BIND").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

fn default_base_url() -> String {
    env::var("SPELLHOST_BASE_URL").unwrap_or_else(|_| "/".to_string())
}

fn default_mount() -> String {
    env::var("SPELLHOST_MOUNT").unwrap_or_else(|_| "spellchecker".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Socket address the HTTP listener binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Prefix shared with a reverse proxy or hub, e.g. "/user/alice/"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path segment the extension is mounted under
    #[serde(default = "default_mount")]
    pub mount: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            bind: default_bind(),
            base_url: default_base_url(),
            mount: default_mount(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
