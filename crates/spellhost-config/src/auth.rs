use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret for the catalog endpoint. `None` disables the check.
    pub token: Option<String>,
}

impl AuthConfig {
    pub fn new() -> Self {
        let token = env::var("SPELLHOST_TOKEN").ok().filter(|t| !t.is_empty());

        Self { token }
    }
}
