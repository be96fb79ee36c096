use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::estimate::EstimateRates;
use super::state::LinodeId;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CloneSettings {
    pub estimate: EstimateRates,
    pub navigation: NavigationSettings,
}

impl CloneSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, else the user settings file if it exists,
    /// else defaults. An explicit path that does not exist is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_settings_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clonectl").join("settings.toml"))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationSettings {
    /// Where to go after a successful clone; `{id}` is the source machine.
    pub success_path: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            success_path: "/linodes/{id}/configurations".to_string(),
        }
    }
}

impl NavigationSettings {
    pub fn success_path_for(&self, source: LinodeId) -> String {
        self.success_path.replace("{id}", &source.to_string())
    }
}
