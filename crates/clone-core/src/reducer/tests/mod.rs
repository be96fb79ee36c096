pub(super) use super::apply;
pub(super) use super::reduce;
pub(super) use crate::actions::CloneAction;
pub(super) use crate::state::ApiError;
pub(super) use crate::state::CloneState;
pub(super) use crate::state::ConfigId;
pub(super) use crate::state::Device;
pub(super) use crate::state::Disk;
pub(super) use crate::state::DiskId;
pub(super) use crate::state::LinodeConfig;

mod error_clearing;
mod selection_reconcile;

fn disk(id: DiskId) -> Disk {
    Disk {
        id,
        label: format!("disk-{id}"),
        size: 2048,
    }
}

fn config(id: ConfigId, disk_ids: &[DiskId]) -> LinodeConfig {
    LinodeConfig {
        id,
        label: format!("config-{id}"),
        devices: disk_ids
            .iter()
            .enumerate()
            .map(|(idx, disk_id)| {
                let slot = format!("sd{}", char::from(b'a' + idx as u8));
                (slot, Some(Device::disk(*disk_id)))
            })
            .collect(),
    }
}

fn sync(configs: Vec<LinodeConfig>, disks: Vec<Disk>) -> CloneAction {
    CloneAction::SyncConfigsDisks { configs, disks }
}

/// Config 1000 mounts disks 2000 and 2001, config 1001 mounts 2001, and
/// disk 2002 is unattached.
fn state() -> CloneState {
    reduce(
        &CloneState::new(),
        sync(
            vec![config(1000, &[2000, 2001]), config(1001, &[2001])],
            vec![disk(2000), disk(2001), disk(2002)],
        ),
    )
}

fn with_errors(mut state: CloneState) -> CloneState {
    state.errors = Some(vec![ApiError::for_field("disk_size", "Too big")]);
    state
}

fn every_action() -> Vec<CloneAction> {
    vec![
        CloneAction::ToggleConfig(1000),
        CloneAction::ToggleDisk(2002),
        CloneAction::SetSelectedTargetMachineId(Some(55)),
        CloneAction::SetSelectedTargetMachineId(None),
        CloneAction::SetSubmitting(true),
        CloneAction::SetErrors(Some(vec![ApiError::new("boom")])),
        CloneAction::SetErrors(None),
        CloneAction::ClearAll,
        sync(vec![config(1000, &[2000])], vec![disk(2000)]),
    ]
}
