use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Viewer configuration, stored at `~/.config/deltascope/config.toml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Delta JSON document opened when the viewer starts without an argument.
    pub document_path: PathBuf,
}

impl Config {
    /// Loads the config file if it exists. A missing file is not an error;
    /// it means the viewer falls back to its built-in sample.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Tilde and env vars are expanded after parsing so the file stays
        // portable across machines.
        if let Some(expanded) = expand_path(&config.document_path) {
            config.document_path = expanded;
        }
        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let dir = shellexpand::tilde("~/.config/deltascope");
        PathBuf::from(dir.as_ref()).join("config.toml")
    }
}

fn expand_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_path_has_no_tilde() {
        let path = Config::config_path();
        let s = path.to_string_lossy();
        assert!(!s.starts_with('~'));
        assert!(s.ends_with(".config/deltascope/config.toml"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        let config = Config {
            document_path: PathBuf::from("/tmp/doc.json"),
        };

        config.save_to_path(&file).unwrap();
        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        assert_eq!(loaded.document_path, config.document_path);
    }

    #[test]
    fn tilde_in_document_path_is_expanded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "document_path = \"~/docs/sample.json\"").unwrap();

        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        let s = loaded.document_path.to_string_lossy();
        assert!(!s.starts_with('~'));
        assert!(s.ends_with("docs/sample.json"));
    }

    #[test]
    fn env_var_in_document_path_is_expanded() {
        unsafe {
            env::set_var("DELTASCOPE_TEST_DOCS", "/custom/docs");
        }
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "document_path = \"$DELTASCOPE_TEST_DOCS/a.json\"").unwrap();

        let loaded = Config::load_from_path(&file).unwrap().unwrap();
        assert_eq!(loaded.document_path, PathBuf::from("/custom/docs/a.json"));
        unsafe {
            env::remove_var("DELTASCOPE_TEST_DOCS");
        }
    }

    #[test]
    fn parse_error_carries_the_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "document_path = [broken").unwrap();

        match Config::load_from_path(&file) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
