use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use spellhost_config::dictionary::DictionaryConfig;

use crate::dictionary::{scan_directory, Catalog, SeenIdentifiers};
use crate::locale::LocaleDatabase;

/// Operating system family, as far as dictionary locations are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }
}

/// Well-known directories where the OS or its package manager installs
/// Hunspell dictionaries
pub fn system_dictionary_paths(platform: Platform) -> Vec<PathBuf> {
    let paths: &[&str] = match platform {
        Platform::Linux => &[
            "/usr/share/hunspell",
            "/usr/share/myspell",
            "/usr/share/myspell/dicts",
        ],
        Platform::MacOs => &["/System/Library/Spelling"],
        // TODO: locate LibreOffice/Office dictionary folders on Windows
        Platform::Windows => &[],
        Platform::Other => &[],
    };
    paths.iter().map(PathBuf::from).collect()
}

/// Every directory to scan, in priority order: configured data paths,
/// additional paths, then system paths.
pub fn search_paths(config: &DictionaryConfig, platform: Platform) -> Vec<PathBuf> {
    let mut paths = config.data_paths.clone();
    paths.extend(config.additional_paths.iter().cloned());
    if config.include_system_paths {
        paths.extend(system_dictionary_paths(platform));
    }
    paths
}

/// Scan `paths` in order and build the catalog.
///
/// A directory listed more than once is scanned only the first time.
pub fn discover<P: AsRef<Path>>(paths: &[P], locales: &dyn LocaleDatabase) -> Catalog {
    let paths: Vec<&Path> = paths.iter().map(AsRef::as_ref).collect();
    tracing::info!("Looking for hunspell dictionaries in {paths:?}");

    let mut seen = SeenIdentifiers::new();
    let mut visited = HashSet::new();
    let mut entries = Vec::new();

    for path in paths {
        if !visited.insert(path) {
            tracing::debug!(directory = %path.display(), "directory already scanned");
            continue;
        }
        entries.extend(scan_directory(path, &mut seen, locales));
    }

    let identifiers: Vec<&str> = entries.iter().map(|e| e.identifier.as_str()).collect();
    tracing::info!(count = entries.len(), "Located hunspell dictionaries: {identifiers:?}");

    Catalog::new(entries)
}
