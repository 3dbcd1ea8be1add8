//! Registry bootstrap configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! initialize_builtins = true
//! disabled_packs = ["experimental_blocks"]
//! optional_pack_failures_fatal = false
//! log_catalog_on_lock = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// How the server sets up its prototype registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Register the built-in prototypes before any content pack
    pub initialize_builtins: bool,
    /// Content packs skipped at bootstrap, by name
    pub disabled_packs: Vec<String>,
    /// Treat a failing optional content pack like a required one
    pub optional_pack_failures_fatal: bool,
    /// Dump every id/name pair at info level once the registry locks
    pub log_catalog_on_lock: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initialize_builtins: true,
            disabled_packs: Vec::new(),
            optional_pack_failures_fatal: false,
            log_catalog_on_lock: false,
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RegistryConfig =
            toml::from_str(source).context("RegistryConfig: invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("RegistryConfig: failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("RegistryConfig: failed to load {}", path.display()))
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for name in &self.disabled_packs {
            if name.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "RegistryConfig: disabled_packs contains an empty pack name"
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(anyhow::anyhow!(
                    "RegistryConfig: pack '{}' listed twice in disabled_packs",
                    name
                ));
            }
        }
        Ok(())
    }

    pub fn is_pack_disabled(&self, name: &str) -> bool {
        self.disabled_packs.iter().any(|disabled| disabled == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = RegistryConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, RegistryConfig::default());
        assert!(config.initialize_builtins);
    }

    #[test]
    fn test_parse_full_document() {
        let config = RegistryConfig::from_toml_str(
            r#"
            initialize_builtins = false
            disabled_packs = ["ores", "furniture"]
            optional_pack_failures_fatal = true
            log_catalog_on_lock = true
            "#,
        )
        .expect("valid config");
        assert!(!config.initialize_builtins);
        assert!(config.is_pack_disabled("ores"));
        assert!(!config.is_pack_disabled("core"));
        assert!(config.optional_pack_failures_fatal);
        assert!(config.log_catalog_on_lock);
    }

    #[test]
    fn test_rejects_duplicate_and_empty_pack_names() {
        assert!(RegistryConfig::from_toml_str(r#"disabled_packs = ["ores", "ores"]"#).is_err());
        assert!(RegistryConfig::from_toml_str(r#"disabled_packs = [" "]"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(RegistryConfig::from_toml_str("initialize_builtins = maybe").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "disabled_packs = [\"ores\"]").expect("write config");

        let config = RegistryConfig::load(file.path()).expect("valid config file");
        assert_eq!(config.disabled_packs, vec!["ores".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(RegistryConfig::load(dir.path().join("missing.toml")).is_err());
    }
}
