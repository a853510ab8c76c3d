use arsip_engine::{ManifestFormat, MarkupProfile, Pager, SearchMode};
use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory of the archive; `~` and `$VAR` are expanded on load.
    pub archive_path: PathBuf,
    /// Manifest file, relative to `archive_path`.
    pub manifest_file: RelativePathBuf,
    pub manifest_format: ManifestFormat,
    /// Directory holding article bodies, relative to `archive_path`.
    pub articles_dir: RelativePathBuf,
    pub markup_profile: MarkupProfile,
    pub search_mode: SearchMode,
    pub page_size: usize,
    /// Page links shown on each side of the current page.
    pub page_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from("."),
            manifest_file: RelativePathBuf::from("data.txt"),
            manifest_format: ManifestFormat::default(),
            articles_dir: RelativePathBuf::from("data"),
            markup_profile: MarkupProfile::default(),
            search_mode: SearchMode::default(),
            page_size: 9,
            page_window: 2,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded archive path
        config.archive_path =
            Self::expand_path(&config.archive_path).unwrap_or(config.archive_path);

        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/arsip");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.manifest_file.as_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "manifest_file",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page_size, self.page_window)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
