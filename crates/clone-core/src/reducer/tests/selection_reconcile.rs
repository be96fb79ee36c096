use super::*;
use pretty_assertions::assert_eq;

#[test]
fn resync_preserves_live_selections() {
    let state = reduce(&state(), CloneAction::ToggleConfig(1000));
    let state = reduce(&state, CloneAction::ToggleDisk(2002));

    let resynced = reduce(
        &state,
        sync(
            vec![config(1000, &[2000]), config(1002, &[])],
            vec![disk(2000), disk(2002), disk(2003)],
        ),
    );

    assert!(resynced.config_selection[&1000].is_selected);
    assert!(!resynced.config_selection[&1002].is_selected);
    assert!(resynced.disk_selection[&2002].is_selected);
    assert!(!resynced.disk_selection[&2003].is_selected);
}

#[test]
fn resync_drops_dead_selections() {
    let state = reduce(&state(), CloneAction::ToggleConfig(1001));
    let state = reduce(&state, CloneAction::ToggleDisk(2002));

    let resynced = reduce(
        &state,
        sync(vec![config(1000, &[2000])], vec![disk(2000)]),
    );

    assert!(!resynced.config_selection.contains_key(&1001));
    assert!(!resynced.disk_selection.contains_key(&2002));
    assert!(resynced.nothing_selected());
}

#[test]
fn resync_recomputes_associations() {
    let resynced = reduce(
        &state(),
        sync(
            vec![config(1000, &[2001]), config(1001, &[2000])],
            vec![disk(2000), disk(2001)],
        ),
    );

    assert_eq!(resynced.config_selection[&1000].associated_disk_ids, vec![2001]);
    assert_eq!(resynced.disk_selection[&2000].associated_config_ids, vec![1001]);
}

#[test]
fn resync_keeps_target_and_submitting() {
    let mut state = state();
    state.selected_target_machine_id = Some(9);
    state.is_submitting = true;

    let resynced = reduce(&state, sync(Vec::new(), Vec::new()));

    assert_eq!(resynced.selected_target_machine_id, Some(9));
    assert!(resynced.is_submitting);
    assert!(resynced.config_selection.is_empty());
    assert!(resynced.disk_selection.is_empty());
}
