use serde::{Deserialize, Serialize};

/// Shape of the `language_manager` response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFormat {
    /// `{"version": ..., "dictionaries": [...]}`
    #[default]
    Envelope,
    /// `[...]`
    Bare,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub format: CatalogFormat,
}
