use std::sync::Arc;

use spellhost_config::Config;
use spellhost_core::{dictionaries_to_url, url_path_join, Catalog, ClientEntry};

/// Shared, read-only server state. The catalog is built once before the
/// listener starts and never changes afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    /// Catalog with file names rewritten to URLs under `mount_path`
    pub client_entries: Arc<Vec<ClientEntry>>,
    /// `base_url` joined with `mount`, e.g. "/spellchecker"
    pub mount_path: String,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let mount_path = url_path_join(&["/", &config.network.base_url, &config.network.mount]);
        let client_entries = dictionaries_to_url(&catalog, &mount_path);

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            client_entries: Arc::new(client_entries),
            mount_path,
        }
    }
}
