use super::state::ApiError;
use super::state::ConfigId;
use super::state::Disk;
use super::state::DiskId;
use super::state::LinodeConfig;
use super::state::LinodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneAction {
    ToggleConfig(ConfigId),
    ToggleDisk(DiskId),
    SetSelectedTargetMachineId(Option<LinodeId>),
    SetSubmitting(bool),
    SetErrors(Option<Vec<ApiError>>),
    ClearAll,
    SyncConfigsDisks {
        configs: Vec<LinodeConfig>,
        disks: Vec<Disk>,
    },
}

impl CloneAction {
    /// Whether applying this action drops any stored errors. Toggles of
    /// unknown ids are no-ops and keep them, which the reducer decides.
    pub fn clears_errors(&self) -> bool {
        !matches!(self, Self::SetSubmitting(_) | Self::SetErrors(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ToggleConfig(_) => "toggle_config",
            Self::ToggleDisk(_) => "toggle_disk",
            Self::SetSelectedTargetMachineId(_) => "set_selected_target_machine_id",
            Self::SetSubmitting(_) => "set_submitting",
            Self::SetErrors(_) => "set_errors",
            Self::ClearAll => "clear_all",
            Self::SyncConfigsDisks { .. } => "sync_configs_disks",
        }
    }
}
