//! Read-only projections of [`CloneState`] used by the clone screen: which
//! configs and disks are shown, what will actually be copied, the estimate,
//! and whether the clone can be submitted.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Serialize;

use super::estimate::estimate_clone_duration_with;
use super::estimate::EstimateMode;
use super::estimate::EstimateRates;
use super::state::ApiError;
use super::state::CloneState;
use super::state::ConfigId;
use super::state::Disk;
use super::state::DiskId;
use super::state::Linode;
use super::state::LinodeConfig;
use super::state::LinodeId;

/// A config together with the disks its device slots point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedConfig {
    pub config: LinodeConfig,
    pub associated_disks: Vec<Disk>,
}

pub fn attach_associated_disks_to_configs(
    configs: &[LinodeConfig],
    disks: &[Disk],
) -> Vec<ExtendedConfig> {
    configs
        .iter()
        .map(|config| ExtendedConfig {
            config: config.clone(),
            associated_disks: config
                .disk_ids()
                .filter_map(|disk_id| disks.iter().find(|disk| disk.id == disk_id))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Every disk reachable from `extended_configs` plus `standalone_disks`,
/// deduplicated by id in first-seen order.
pub fn get_all_disks(extended_configs: &[ExtendedConfig], standalone_disks: &[Disk]) -> Vec<Disk> {
    let mut seen = HashSet::new();
    extended_configs
        .iter()
        .flat_map(|extended| extended.associated_disks.iter())
        .chain(standalone_disks.iter())
        .filter(|disk| seen.insert(disk.id))
        .cloned()
        .collect()
}

pub fn configs_in_state<'a>(state: &CloneState, configs: &'a [LinodeConfig]) -> Vec<&'a LinodeConfig> {
    configs
        .iter()
        .filter(|config| state.config_selection.contains_key(&config.id))
        .collect()
}

pub fn disks_in_state<'a>(state: &CloneState, disks: &'a [Disk]) -> Vec<&'a Disk> {
    disks
        .iter()
        .filter(|disk| state.disk_selection.contains_key(&disk.id))
        .collect()
}

/// Selected config ids in the order of `configs`.
pub fn selected_config_ids(state: &CloneState, configs: &[LinodeConfig]) -> Vec<ConfigId> {
    configs
        .iter()
        .filter(|config| state.is_config_selected(config.id))
        .map(|config| config.id)
        .collect()
}

/// Selected disk ids in the order of `disks`.
pub fn selected_disk_ids(state: &CloneState, disks: &[Disk]) -> Vec<DiskId> {
    disks
        .iter()
        .filter(|disk| state.is_disk_selected(disk.id))
        .map(|disk| disk.id)
        .collect()
}

/// Disks selected on their own whose configs are all unselected. A disk
/// whose config is selected is copied as part of that config instead.
pub fn standalone_selected_disks(state: &CloneState, disks: &[Disk]) -> Vec<Disk> {
    disks
        .iter()
        .filter(|disk| {
            state.is_disk_selected(disk.id) && !state.disk_locked_by_config(disk.id)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloneMode {
    /// Copy one disk onto the machine it already lives on.
    DuplicateDisk,
    CloneToMachine { destination: LinodeId },
}

impl CloneMode {
    pub fn for_target(source: LinodeId, target: Option<LinodeId>) -> Option<Self> {
        match target? {
            id if id == source => Some(Self::DuplicateDisk),
            destination => Some(Self::CloneToMachine { destination }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DuplicateDisk => "Duplicate disk",
            Self::CloneToMachine { .. } => "Clone to machine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    Submitting,
    NoTarget,
    NothingSelected,
    DuplicateNeedsSingleDisk,
}

impl BlockedReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitting => "A clone request is already in flight",
            Self::NoTarget => "Select a destination",
            Self::NothingSelected => "Select at least one configuration profile or disk",
            Self::DuplicateNeedsSingleDisk => {
                "Duplicating onto the same machine requires exactly one disk and no configuration profiles"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    Blocked(BlockedReason),
}

impl Readiness {
    pub fn evaluate(state: &CloneState, source: LinodeId) -> Self {
        if state.is_submitting {
            return Self::Blocked(BlockedReason::Submitting);
        }
        if state.nothing_selected() {
            return Self::Blocked(BlockedReason::NothingSelected);
        }
        match CloneMode::for_target(source, state.selected_target_machine_id) {
            None => Self::Blocked(BlockedReason::NoTarget),
            Some(CloneMode::DuplicateDisk)
                if !state.selected_config_ids().is_empty()
                    || state.selected_disk_ids().len() != 1 =>
            {
                Self::Blocked(BlockedReason::DuplicateNeedsSingleDisk)
            }
            Some(_) => Self::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Everything the details panel shows for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneSummary {
    pub selected_configs: Vec<ExtendedConfig>,
    pub standalone_disks: Vec<Disk>,
    pub all_disks: Vec<Disk>,
    pub total_size_mib: u64,
    pub mode: Option<CloneMode>,
    pub estimate_mode: EstimateMode,
    pub estimate: String,
    pub readiness: Readiness,
}

impl CloneSummary {
    pub fn derive(
        state: &CloneState,
        source: &Linode,
        configs: &[LinodeConfig],
        disks: &[Disk],
        linodes: &[Linode],
        rates: &EstimateRates,
    ) -> Self {
        let selected: Vec<LinodeConfig> = configs_in_state(state, configs)
            .into_iter()
            .filter(|config| state.is_config_selected(config.id))
            .cloned()
            .collect();
        let selected_configs = attach_associated_disks_to_configs(&selected, disks);
        let standalone_disks = standalone_selected_disks(state, disks);
        let all_disks = get_all_disks(&selected_configs, &standalone_disks);
        let total_size_mib = all_disks.iter().map(|disk| disk.size).sum();

        let target_region = state
            .selected_target_machine_id
            .and_then(|id| linodes.iter().find(|linode| linode.id == id))
            .map(|linode| linode.region.as_str());
        let estimate_mode = match target_region {
            Some(region) if region != source.region => EstimateMode::DifferentLocation,
            _ => EstimateMode::SameLocation,
        };

        Self {
            selected_configs,
            standalone_disks,
            all_disks,
            total_size_mib,
            mode: CloneMode::for_target(source.id, state.selected_target_machine_id),
            estimate_mode,
            estimate: estimate_clone_duration_with(rates, total_size_mib, estimate_mode),
            readiness: Readiness::evaluate(state, source.id),
        }
    }
}

/// API errors keyed by the form field they belong to. Errors for fields the
/// form does not render land in `none`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap {
    pub none: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl ErrorMap {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.none.is_none() && self.fields.is_empty()
    }
}

pub fn error_map(fields: &[&str], errors: Option<&[ApiError]>) -> ErrorMap {
    let mut map = ErrorMap::default();
    for error in errors.unwrap_or_default() {
        match error.field.as_deref() {
            Some(field) if fields.contains(&field) => {
                map.fields.insert(field.to_string(), error.reason.clone());
            }
            _ => map.none = Some(error.reason.clone()),
        }
    }
    map
}
