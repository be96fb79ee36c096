use super::actions::CloneAction;

/// Toggles requested by a `?selectedConfig=<id>&selectedDisk=<id>` deep link.
/// Missing, zero, or non-numeric values are ignored.
pub fn preselection_actions(query: &str) -> Vec<CloneAction> {
    let mut config = None;
    let mut disk = None;

    for pair in query.trim_start_matches('?').split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(id) = value.trim().parse::<u64>().ok().filter(|id| *id > 0) else {
            continue;
        };
        match key {
            "selectedConfig" => config = Some(id),
            "selectedDisk" => disk = Some(id),
            _ => {}
        }
    }

    config
        .map(CloneAction::ToggleConfig)
        .into_iter()
        .chain(disk.map(CloneAction::ToggleDisk))
        .collect()
}
