use super::actions::CloneAction;
use super::selection::build_selection;
use super::state::CloneState;

/// Returns the state that results from `action`; `state` is left untouched.
pub fn reduce(state: &CloneState, action: CloneAction) -> CloneState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

/// In-place form of [`reduce`] for callers that own the session state.
pub fn apply(state: &mut CloneState, action: CloneAction) {
    tracing::trace!(action = action.label(), "applying clone action");
    match action {
        CloneAction::ToggleConfig(id) => {
            let Some(entry) = state.config_selection.get_mut(&id) else {
                tracing::debug!(config_id = id, "ignoring toggle for unknown config");
                return;
            };
            entry.is_selected = !entry.is_selected;
            state.errors = None;
        }
        CloneAction::ToggleDisk(id) => {
            let Some(entry) = state.disk_selection.get_mut(&id) else {
                tracing::debug!(disk_id = id, "ignoring toggle for unknown disk");
                return;
            };
            entry.is_selected = !entry.is_selected;
            state.errors = None;
        }
        CloneAction::SetSelectedTargetMachineId(id) => {
            state.selected_target_machine_id = id;
            state.errors = None;
        }
        CloneAction::SetSubmitting(value) => {
            state.is_submitting = value;
        }
        CloneAction::SetErrors(errors) => {
            state.errors = errors;
        }
        CloneAction::ClearAll => {
            for entry in state.config_selection.values_mut() {
                entry.is_selected = false;
            }
            for entry in state.disk_selection.values_mut() {
                entry.is_selected = false;
            }
            state.selected_target_machine_id = None;
            state.errors = None;
        }
        CloneAction::SyncConfigsDisks { configs, disks } => {
            let selection = build_selection(
                &configs,
                &disks,
                &state.selected_config_ids(),
                &state.selected_disk_ids(),
            );
            tracing::trace!(
                configs = selection.config_selection.len(),
                disks = selection.disk_selection.len(),
                "resynced clone selection"
            );
            state.config_selection = selection.config_selection;
            state.disk_selection = selection.disk_selection;
            state.errors = None;
        }
    }
}

#[cfg(test)]
mod tests;
