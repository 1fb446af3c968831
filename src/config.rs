//! Configuration loading
//!
//! Looks for `srcorder.toml` in the working directory unless a path is given,
//! then applies `SRCORDER_*` environment overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "srcorder.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extensions: ExtensionsConfig,
    pub output: OutputConfig,
}

/// File extensions (without the dot) mapped to each dialect
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub module: Vec<String>,
    pub include: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            module: ["f", "for", "f90", "f95", "f03", "f08", "fpp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include: ["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Explicit path must exist; otherwise fall back to `srcorder.toml` in
    /// `dir`, then to defaults.
    pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    Self::load(&candidate)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env_overrides())
    }

    /// Apply environment variable overrides (SRCORDER_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var("SRCORDER_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => self.output.format = OutputFormat::Json,
                "text" => self.output.format = OutputFormat::Text,
                _ => {}
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.extensions.module.contains(&"f90".to_string()));
        assert!(config.extensions.include.contains(&"h".to_string()));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[extensions]
module = ["f90", "F90"]
"#,
        )
        .unwrap();
        assert_eq!(config.extensions.module, vec!["f90", "F90"]);
        assert!(config.extensions.include.contains(&"cpp".to_string()));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[extensions]\ninclude = [\"cu\"]\n",
        )
        .unwrap();

        let config = Config::load_or_default(None, dir.path()).unwrap();
        assert_eq!(config.extensions.include, vec!["cu"]);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_or_default(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
