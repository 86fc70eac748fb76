//! Display names for dictionary locale codes.

use isocountry::CountryCode;
use isolang::Language;
use language_tags::LanguageTag;
use spellhost_config::DisplayLanguage;

/// Reference data mapping a normalized locale code (`de_AT`) to a
/// human-readable name.
pub trait LocaleDatabase: Send + Sync {
    fn display_name(&self, code: &str) -> Result<String, LocaleError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("{code} does not appear to be a valid locale code: {reason}")]
    InvalidSyntax { code: String, reason: String },

    #[error("{0} is not a known locale")]
    UnknownLocale(String),

    #[error("lookup of {code} failed: {reason}")]
    Lookup { code: String, reason: String },
}

/// ISO 639 language names with ISO 3166 region names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoLocaleDatabase {
    display_language: DisplayLanguage,
}

impl IsoLocaleDatabase {
    pub fn new(display_language: DisplayLanguage) -> Self {
        Self { display_language }
    }

    fn language_name(&self, language: Language) -> &'static str {
        match self.display_language {
            DisplayLanguage::English => language.to_name(),
            DisplayLanguage::Native => language.to_autonym().unwrap_or_else(|| language.to_name()),
        }
    }
}

fn lookup_language(primary: &str) -> Option<Language> {
    let primary = primary.to_ascii_lowercase();
    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// ISO 15924 names of the scripts dictionaries are commonly split by
fn script_name(script: &str) -> &str {
    match script {
        "Arab" => "Arabic",
        "Armn" => "Armenian",
        "Beng" => "Bangla",
        "Cyrl" => "Cyrillic",
        "Deva" => "Devanagari",
        "Ethi" => "Ethiopic",
        "Geor" => "Georgian",
        "Grek" => "Greek",
        "Hans" => "Simplified",
        "Hant" => "Traditional",
        "Hebr" => "Hebrew",
        "Latn" => "Latin",
        "Mong" => "Mongolian",
        "Taml" => "Tamil",
        "Tfng" => "Tifinagh",
        "Thai" => "Thai",
        other => other,
    }
}

/// Everyday names for regions whose ISO 3166 name is the long formal one
fn short_region_name(region: &str) -> Option<&'static str> {
    let name = match region {
        "BA" => "Bosnia & Herzegovina",
        "BO" => "Bolivia",
        "BN" => "Brunei",
        "CD" => "Congo - Kinshasa",
        "CG" => "Congo - Brazzaville",
        "CZ" => "Czechia",
        "FM" => "Micronesia",
        "GB" => "United Kingdom",
        "HK" => "Hong Kong",
        "IR" => "Iran",
        "KP" => "North Korea",
        "KR" => "South Korea",
        "LA" => "Laos",
        "MD" => "Moldova",
        "MK" => "North Macedonia",
        "MO" => "Macao",
        "NL" => "Netherlands",
        "PS" => "Palestinian Territories",
        "RU" => "Russia",
        "SY" => "Syria",
        "TW" => "Taiwan",
        "TZ" => "Tanzania",
        "US" => "United States",
        "VA" => "Vatican City",
        "VE" => "Venezuela",
        "VN" => "Vietnam",
        _ => return None,
    };
    Some(name)
}

fn region_name(region: &str) -> String {
    // UN M.49 areas have no ISO 3166 name
    if region.parse::<u32>().is_ok() {
        return region.to_string();
    }

    let region = region.to_ascii_uppercase();
    if let Some(name) = short_region_name(&region) {
        return name.to_string();
    }
    CountryCode::for_alpha2(&region)
        .map(|country| country.name().to_string())
        .unwrap_or(region)
}

impl LocaleDatabase for IsoLocaleDatabase {
    fn display_name(&self, code: &str) -> Result<String, LocaleError> {
        let tag_text = code.replace('_', "-");
        let tag = LanguageTag::parse(&tag_text).map_err(|e| LocaleError::InvalidSyntax {
            code: code.to_string(),
            reason: e.to_string(),
        })?;

        if tag.extension().is_some() || tag.private_use().is_some() {
            return Err(LocaleError::Lookup {
                code: code.to_string(),
                reason: "extension and private-use subtags are not supported".to_string(),
            });
        }

        let language = lookup_language(tag.primary_language())
            .ok_or_else(|| LocaleError::UnknownLocale(code.to_string()))?;

        let mut qualifiers = Vec::new();
        if let Some(script) = tag.script() {
            qualifiers.push(script_name(script).to_string());
        }
        if let Some(region) = tag.region() {
            qualifiers.push(region_name(region));
        }
        qualifiers.extend(tag.variant_subtags().map(str::to_string));

        let name = self.language_name(language);
        if qualifiers.is_empty() {
            Ok(name.to_string())
        } else {
            Ok(format!("{name} ({})", qualifiers.join(", ")))
        }
    }
}
