use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

pub type ConfigId = u64;
pub type DiskId = u64;
pub type VolumeId = u64;
pub type LinodeId = u64;

/// A machine the user can pick as the clone destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linode {
    pub id: LinodeId,
    pub label: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    pub id: DiskId,
    #[serde(default)]
    pub label: String,
    /// Size in MiB.
    #[serde(default)]
    pub size: u64,
}

/// Payload of a device slot. The API sends both keys and nulls the one that
/// does not apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub disk_id: Option<DiskId>,
    #[serde(default)]
    pub volume_id: Option<VolumeId>,
}

impl Device {
    pub fn disk(disk_id: DiskId) -> Self {
        Self {
            disk_id: Some(disk_id),
            volume_id: None,
        }
    }

    pub fn volume(volume_id: VolumeId) -> Self {
        Self {
            disk_id: None,
            volume_id: Some(volume_id),
        }
    }

    /// The referenced disk, if this slot holds a disk rather than a volume.
    pub fn disk_id(&self) -> Option<DiskId> {
        self.disk_id
    }

    pub fn is_disk(&self) -> bool {
        self.disk_id.is_some()
    }
}

/// Slot name (`sda`, `sdb`, ...) to optional device. Ordered by slot name,
/// which is the order the API lists them in.
pub type DeviceMap = BTreeMap<String, Option<Device>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinodeConfig {
    pub id: ConfigId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub devices: DeviceMap,
}

impl LinodeConfig {
    /// Disk ids mounted by this config, in slot order. Volume slots and empty
    /// slots are skipped; repeated disks are kept.
    pub fn disk_ids(&self) -> impl Iterator<Item = DiskId> + '_ {
        self.devices
            .values()
            .filter_map(|device| device.as_ref().and_then(Device::disk_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            field: None,
        }
    }

    pub fn for_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            field: Some(field.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSelectionEntry {
    pub associated_disk_ids: Vec<DiskId>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskSelectionEntry {
    pub associated_config_ids: Vec<ConfigId>,
    /// The user's own toggle. Views treat the disk as selected (and locked)
    /// whenever one of its configs is selected; see
    /// [`CloneState::disk_locked_by_config`].
    pub is_selected: bool,
}

pub type ConfigSelection = BTreeMap<ConfigId, ConfigSelectionEntry>;
pub type DiskSelection = BTreeMap<DiskId, DiskSelectionEntry>;

/// State of one clone wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneState {
    pub config_selection: ConfigSelection,
    pub disk_selection: DiskSelection,
    pub selected_target_machine_id: Option<LinodeId>,
    pub is_submitting: bool,
    pub errors: Option<Vec<ApiError>>,
}

impl CloneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_config_ids(&self) -> Vec<ConfigId> {
        self.config_selection
            .iter()
            .filter(|(_, entry)| entry.is_selected)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn selected_disk_ids(&self) -> Vec<DiskId> {
        self.disk_selection
            .iter()
            .filter(|(_, entry)| entry.is_selected)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_config_selected(&self, id: ConfigId) -> bool {
        self.config_selection
            .get(&id)
            .is_some_and(|entry| entry.is_selected)
    }

    pub fn is_disk_selected(&self, id: DiskId) -> bool {
        self.disk_selection
            .get(&id)
            .is_some_and(|entry| entry.is_selected)
    }

    /// True when a selected config mounts this disk. The disk checkbox is then
    /// shown checked and disabled regardless of `is_selected`.
    pub fn disk_locked_by_config(&self, id: DiskId) -> bool {
        self.disk_selection.get(&id).is_some_and(|entry| {
            entry
                .associated_config_ids
                .iter()
                .any(|config_id| self.is_config_selected(*config_id))
        })
    }

    pub fn nothing_selected(&self) -> bool {
        !self.config_selection.values().any(|entry| entry.is_selected)
            && !self.disk_selection.values().any(|entry| entry.is_selected)
    }
}
