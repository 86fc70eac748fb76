pub mod code;
pub mod dictionary;
pub mod discovery;
pub mod locale;
pub mod url;

pub use code::extract_code;
pub use dictionary::{Catalog, DictionaryEntry};
pub use discovery::{discover, search_paths, Platform};
pub use locale::{IsoLocaleDatabase, LocaleDatabase, LocaleError};
pub use url::{dictionaries_to_url, url_path_join, ClientEntry};
