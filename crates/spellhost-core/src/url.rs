use serde::Serialize;

use crate::dictionary::Catalog;

/// Catalog entry as the frontend sees it: file locations are URLs and the
/// server-side directory is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEntry {
    pub id: String,
    pub code: String,
    pub name: String,
    pub aff: String,
    pub dic: String,
}

/// Join URL path pieces with a single `/` between each.
///
/// A leading `/` on the first piece and a trailing `/` on the last are kept.
pub fn url_path_join(parts: &[&str]) -> String {
    let pieces: Vec<&str> = parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect();

    let mut joined = pieces.join("/");
    if parts.first().is_some_and(|p| p.starts_with('/')) {
        joined.insert(0, '/');
    }
    if parts.len() > 1 && parts.last().is_some_and(|p| p.ends_with('/')) && !joined.ends_with('/') {
        joined.push('/');
    }
    joined
}

pub fn dictionaries_to_url(catalog: &Catalog, base_url: &str) -> Vec<ClientEntry> {
    catalog
        .entries()
        .iter()
        .map(|entry| ClientEntry {
            id: entry.identifier.clone(),
            code: entry.code.clone(),
            name: entry.display_name.clone(),
            aff: url_path_join(&[base_url, &entry.identifier, &entry.affix_filename]),
            dic: url_path_join(&[base_url, &entry.identifier, &entry.dictionary_filename]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::dictionary::DictionaryEntry;

    fn entry(identifier: &str, base: &str) -> DictionaryEntry {
        DictionaryEntry {
            identifier: identifier.to_string(),
            code: "en_US".to_string(),
            directory: PathBuf::from("/usr/share/hunspell"),
            affix_filename: format!("{base}.aff"),
            dictionary_filename: format!("{base}.dic"),
            display_name: "English (United States)".to_string(),
        }
    }

    #[test]
    fn join() {
        assert_eq!(url_path_join(&["/", "spellchecker"]), "/spellchecker");
        assert_eq!(url_path_join(&["/base/", "/spellchecker/", "en"]), "/base/spellchecker/en");
        assert_eq!(url_path_join(&["/a", "b/"]), "/a/b/");
        assert_eq!(url_path_join(&["/"]), "/");
        assert_eq!(url_path_join(&["a", "", "b"]), "a/b");
    }

    #[test]
    fn rewrites_file_names_to_urls() {
        let catalog = Catalog::new(vec![entry("en_US", "en_US")]);

        let client = dictionaries_to_url(&catalog, "/spellchecker");

        assert_eq!(
            client,
            vec![ClientEntry {
                id: "en_US".to_string(),
                code: "en_US".to_string(),
                name: "English (United States)".to_string(),
                aff: "/spellchecker/en_US/en_US.aff".to_string(),
                dic: "/spellchecker/en_US/en_US.dic".to_string(),
            }]
        );
    }

    #[test]
    fn qualified_identifier_collapses_slashes() {
        let catalog = Catalog::new(vec![entry("/usr/share/myspell/en", "en")]);

        let client = dictionaries_to_url(&catalog, "/hub/spellchecker/");

        assert_eq!(client[0].aff, "/hub/spellchecker/usr/share/myspell/en/en.aff");
        assert_eq!(client[0].id, "/usr/share/myspell/en");
    }

    #[test]
    fn directory_is_not_serialized() {
        let catalog = Catalog::new(vec![entry("en_US", "en_US")]);

        let json = serde_json::to_value(dictionaries_to_url(&catalog, "/s")).unwrap();

        let object = json[0].as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["aff", "code", "dic", "id", "name"]);
    }
}
