use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use spellhost_config::Config;

/// Load the JSON profile at `path`.
///
/// A missing file is not an error: the environment-derived defaults are
/// used instead. Fields absent from the file keep their defaults too.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::new());
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing profile {}", path.display()))?;
    Ok(config)
}
