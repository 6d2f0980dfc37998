//! Configuration file discovery and loading

use crate::document::ConfigDocument;
use crate::error::{LintrcError, Result};
use std::path::{Path, PathBuf};

/// Recognized configuration file names, in priority order
const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.jsonc",
    ".lintrc.toml",
    "lintrc.yaml",
    "lintrc.yml",
    "lintrc.json",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Tries the recognized file names in priority order in each directory,
    /// starting from the given one and moving up the directory tree until a
    /// config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::Config {
                message: format!("Invalid path: {e}"),
            })?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached filesystem root
                break;
            }
        }

        Ok(None)
    }

    /// Load a configuration document from a specific file
    ///
    /// Supports JSON (.json), JSONC (.jsonc), YAML (.yaml, .yml), and
    /// TOML (.toml) formats.
    pub fn load_from_file(path: &Path) -> Result<ConfigDocument> {
        ConfigDocument::from_path(path).map_err(|e| match e {
            err @ LintrcError::Io { .. } => err,
            other => LintrcError::Config {
                message: format!("Failed to load config from '{}': {other}", path.display()),
            },
        })
    }

    /// Load a config from an explicit path or by auto-discovery
    ///
    /// If a custom path is provided, loads from that path. Otherwise,
    /// attempts to auto-discover a config file starting from the given
    /// directory (or the current directory).
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ConfigDocument> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintrcError::Config {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            let current_dir = search_dir
                .canonicalize()
                .map_err(|e| LintrcError::Config {
                    message: format!("Failed to resolve directory: {e}"),
                })?;

            Self::auto_discover(&current_dir)?.ok_or_else(|| LintrcError::Config {
                message: format!(
                    "No config file found (looked for {})",
                    CONFIG_FILE_NAMES.join(", ")
                ),
            })?
        };

        Self::load_from_file(&config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintrc.json",
            r#"{
                "root": true,
                "rules": { "no-lonely-if": "off" }
            }"#,
        );

        let document = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(document.root);
        assert!(!document.rules.is_enabled("no-lonely-if"));
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.jsonc",
            r#"{
                // comments are allowed here
                "extends": ["airbnb-base"],
                "rules": {
                    "no-lonely-if": "off",
                },
            }"#,
        );

        let document = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(document.extends, ["airbnb-base"]);
    }

    #[test]
    fn test_load_from_file_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintrc",
            r#"
root = true

[rules]
"no-lonely-if" = "off"
"#,
        );

        let document = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(document.root);
    }

    #[test]
    fn test_auto_discover_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), "lintrc.json", r#"{ "root": true }"#);

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().file_name().unwrap(), "lintrc.json");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), ".lintrc.json", r#"{ "root": true }"#);
        create_temp_config(temp_dir.path(), "lintrc.yaml", "root: true");
        create_temp_config(temp_dir.path(), "lintrc.json", r#"{ "root": true }"#);

        // Dotfile configs win over the bare names
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintrc.json");
    }

    #[test]
    fn test_auto_discover_toml() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("pkg");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(
            temp_dir.path(),
            ".lintrc.toml",
            r#"
extends = ["airbnb-base"]
"#,
        );

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintrc.toml");
    }

    #[test]
    fn test_auto_discover_nothing_found() {
        let temp_dir = TempDir::new().unwrap();
        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Some(Path::new("nonexistent.json")), None);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Config file not found"), "{message}");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(temp_dir.path(), "bad.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to load config from"), "{message}");
    }

    #[test]
    fn test_load_with_auto_discovery() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(
            temp_dir.path(),
            "lintrc.yaml",
            r#"
extends:
  - airbnb-base
rules:
  no-lonely-if: "off"
"#,
        );

        let document = ConfigLoader::load(None, Some(temp_dir.path())).unwrap();
        assert_eq!(document.extends, ["airbnb-base"]);
    }

    #[test]
    fn test_load_without_discovery_hit() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load(None, Some(temp_dir.path()));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("No config file found"), "{message}");
    }
}
