use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::code::extract_code;
use crate::locale::{LocaleDatabase, LocaleError};

pub const DICTIONARY_EXTENSION: &str = "dic";
pub const AFFIX_EXTENSION: &str = "aff";

/// One Hunspell `.aff`/`.dic` pair found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Unique within a discovery run
    pub identifier: String,
    /// Underscore form, e.g. `en_GB`
    pub code: String,
    pub directory: PathBuf,
    pub affix_filename: String,
    pub dictionary_filename: String,
    pub display_name: String,
}

impl DictionaryEntry {
    /// Location on disk of `filename`, if it is one of this entry's two files
    pub fn file_path(&self, filename: &str) -> Option<PathBuf> {
        if filename == self.affix_filename || filename == self.dictionary_filename {
            Some(self.directory.join(filename))
        } else {
            None
        }
    }
}

/// Base names already claimed during one discovery run.
///
/// Shared across every scanned directory so that a second `en.dic` elsewhere
/// gets a directory-qualified identifier.
#[derive(Debug, Default)]
pub struct SeenIdentifiers {
    base_names: HashSet<String>,
}

impl SeenIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the identifier for `base_name` found in `directory` and record it
    pub fn claim(&mut self, directory: &Path, base_name: &str) -> String {
        if self.base_names.insert(base_name.to_string()) {
            base_name.to_string()
        } else {
            directory.join(base_name).to_string_lossy().into_owned()
        }
    }
}

/// Discovered dictionaries, in discovery order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DictionaryEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by identifier, ignoring leading and trailing slashes.
    ///
    /// Directory-qualified identifiers lose their leading `/` once joined
    /// into a URL, so both forms resolve to the same entry.
    pub fn get(&self, identifier: &str) -> Option<&DictionaryEntry> {
        let wanted = identifier.trim_matches('/');
        self.entries
            .iter()
            .find(|entry| entry.identifier.trim_matches('/') == wanted)
    }
}

fn dictionary_files(directory: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        let is_dictionary = path.extension().is_some_and(|ext| ext == DICTIONARY_EXTENSION);
        if is_dictionary && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Scan one directory for dictionary pairs.
///
/// Problems with a single file are logged and the file is skipped; a missing
/// or unreadable directory yields no entries.
pub fn scan_directory(
    directory: &Path,
    seen: &mut SeenIdentifiers,
    locales: &dyn LocaleDatabase,
) -> Vec<DictionaryEntry> {
    let files = match dictionary_files(directory) {
        Ok(files) => files,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(directory = %directory.display(), "dictionary directory does not exist");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(directory = %directory.display(), "could not read dictionary directory: {e}");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for dic_path in files {
        let Some(base_name) = dic_path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %dic_path.display(), "skipping dictionary with a non UTF-8 filename");
            continue;
        };
        let base_name = base_name.to_string();
        let identifier = seen.claim(directory, &base_name);

        let Some(code) = extract_code(&base_name) else {
            tracing::warn!(
                "Could not recognize code for {identifier} dictionary in {}: {base_name} does not match the language tag pattern",
                directory.display()
            );
            continue;
        };
        let code = code.replace('-', "_");

        let affix_filename = format!("{base_name}.{AFFIX_EXTENSION}");
        if !directory.join(&affix_filename).is_file() {
            tracing::warn!(
                "Could not add {identifier} dictionary from {}: .dic exists ({}) but could not find matching .aff file",
                directory.display(),
                dic_path.display()
            );
            continue;
        }

        let display_name = match locales.display_name(&code) {
            Ok(name) => name,
            Err(e) => {
                let kind = match &e {
                    LocaleError::InvalidSyntax { .. } => "invalid locale code",
                    LocaleError::UnknownLocale(_) => "unknown locale",
                    LocaleError::Lookup { .. } => "locale lookup failed",
                };
                tracing::warn!(
                    "Could not obtain language name for {identifier} dictionary from {} ({kind}): {e}",
                    directory.display()
                );
                base_name.clone()
            }
        };

        entries.push(DictionaryEntry {
            identifier,
            code,
            directory: directory.to_path_buf(),
            affix_filename,
            dictionary_filename: format!("{base_name}.{DICTIONARY_EXTENSION}"),
            display_name,
        });
    }

    entries
}
