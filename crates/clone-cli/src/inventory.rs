use std::path::Path;
use std::path::PathBuf;

use clone_core::Disk;
use clone_core::Linode;
use clone_core::LinodeConfig;
use serde::Deserialize;

/// A snapshot of what the API would return for one source machine.
#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
    pub linode: Linode,
    #[serde(default)]
    pub linodes: Vec<Linode>,
    #[serde(default)]
    pub configs: Vec<LinodeConfig>,
    #[serde(default)]
    pub disks: Vec<Disk>,
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("failed to read inventory {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON inventory {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid YAML inventory {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Inventory {
    /// Reads a `.yaml`/`.yml` or JSON inventory, picked by extension.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let mut inventory: Self = if is_yaml {
            serde_yaml::from_str(&text).map_err(|source| InventoryError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(&text).map_err(|source| InventoryError::Json {
                path: path.to_path_buf(),
                source,
            })?
        };

        if !inventory.linodes.iter().any(|linode| linode.id == inventory.linode.id) {
            inventory.linodes.insert(0, inventory.linode.clone());
        }
        Ok(inventory)
    }
}
