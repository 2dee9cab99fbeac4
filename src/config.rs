use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_derive::Deserialize;

/// Generator settings, read from a TOML file next to the project using the
/// generated output.
#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// JSON schema description to read.
    pub schema_path: PathBuf,
    /// Directory schema.js and request.js are written into.
    pub output_folder: PathBuf,
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;

        let config = toml::from_str(&raw)
            .with_context(|| format!("malformed settings {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_parse_from_toml() {
        let config: GeneratorConfig = toml::from_str(
            "schema_path = \"schema.json\"\noutput_folder = \"src/lib\"\n",
        )
        .unwrap();

        assert_eq!(config.schema_path, PathBuf::from("schema.json"));
        assert_eq!(config.output_folder, PathBuf::from("src/lib"));
    }
}
