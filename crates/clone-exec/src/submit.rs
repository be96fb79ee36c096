use clone_core::apply;
use clone_core::selected_config_ids;
use clone_core::selected_disk_ids;
use clone_core::CloneAction;
use clone_core::CloneState;
use clone_core::Disk;
use clone_core::LinodeConfig;
use clone_core::LinodeId;
use clone_core::NavigationSettings;

use crate::contracts::CloneRequest;
use crate::executor::CloneClient;

/// What the host screen should do once a clone has gone through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneEffect {
    /// Event polling should restart so the new clone's progress shows up.
    ResetEventsPolling,
    Navigate { path: String },
}

/// Turns the current selection into the request a submit would send.
///
/// `None` when no destination is chosen, or when duplicating onto the source
/// machine without exactly one selected disk.
pub fn resolve_request(
    state: &CloneState,
    source_linode_id: LinodeId,
    configs: &[LinodeConfig],
    disks: &[Disk],
) -> Option<CloneRequest> {
    let destination = state.selected_target_machine_id?;
    let disk_ids = selected_disk_ids(state, disks);

    if destination == source_linode_id {
        let [disk_id] = disk_ids.as_slice() else {
            return None;
        };
        return Some(CloneRequest::DuplicateDisk {
            linode_id: source_linode_id,
            disk_id: *disk_id,
        });
    }

    Some(CloneRequest::CloneLinode {
        source_linode_id,
        destination_linode_id: destination,
        configs: selected_config_ids(state, configs),
        disks: disk_ids,
    })
}

/// Sends the clone for the current selection and folds the outcome back into
/// `state` through `SetSubmitting` / `SetErrors`.
///
/// Returns no effects when there is nothing to send or the API rejected the
/// request; the rejection is then in `state.errors`.
pub fn submit_clone<C: CloneClient>(
    state: &mut CloneState,
    source_linode_id: LinodeId,
    configs: &[LinodeConfig],
    disks: &[Disk],
    client: &C,
    navigation: &NavigationSettings,
) -> Vec<CloneEffect> {
    let Some(request) = resolve_request(state, source_linode_id, configs, disks) else {
        tracing::debug!(source_linode_id, "clone submit ignored: selection incomplete");
        return Vec::new();
    };

    apply(state, CloneAction::SetSubmitting(true));
    apply(state, CloneAction::SetErrors(None));

    tracing::info!(kind = request.label(), source_linode_id, "sending clone request");
    let outcome = client.perform_clone(&request);
    apply(state, CloneAction::SetSubmitting(false));

    match outcome {
        Ok(receipt) => {
            tracing::info!(?receipt, "clone request accepted");
            vec![
                CloneEffect::ResetEventsPolling,
                CloneEffect::Navigate {
                    path: navigation.success_path_for(source_linode_id),
                },
            ]
        }
        Err(rejected) => {
            tracing::warn!(error = %rejected, "clone request rejected");
            apply(state, CloneAction::SetErrors(Some(rejected.0)));
            Vec::new()
        }
    }
}
