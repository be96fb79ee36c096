use std::collections::BTreeMap;

use super::state::ConfigId;
use super::state::ConfigSelection;
use super::state::ConfigSelectionEntry;
use super::state::Disk;
use super::state::DiskId;
use super::state::DiskSelection;
use super::state::DiskSelectionEntry;
use super::state::LinodeConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub config_selection: ConfigSelection,
    pub disk_selection: DiskSelection,
}

/// Builds both selection maps from the machine's configs and disks.
///
/// Ids listed in `preselected_config_ids` / `preselected_disk_ids` start
/// selected; ids in those lists that are not among `configs` / `disks` are
/// ignored.
pub fn build_selection(
    configs: &[LinodeConfig],
    disks: &[Disk],
    preselected_config_ids: &[ConfigId],
    preselected_disk_ids: &[DiskId],
) -> Selection {
    let mut configs_by_disk: BTreeMap<DiskId, Vec<ConfigId>> = BTreeMap::new();
    let mut config_selection = ConfigSelection::new();

    for config in configs {
        let associated_disk_ids: Vec<DiskId> = config.disk_ids().collect();
        for disk_id in &associated_disk_ids {
            configs_by_disk.entry(*disk_id).or_default().push(config.id);
        }
        config_selection.insert(
            config.id,
            ConfigSelectionEntry {
                associated_disk_ids,
                is_selected: preselected_config_ids.contains(&config.id),
            },
        );
    }

    let disk_selection = disks
        .iter()
        .map(|disk| {
            let entry = DiskSelectionEntry {
                associated_config_ids: configs_by_disk.remove(&disk.id).unwrap_or_default(),
                is_selected: preselected_disk_ids.contains(&disk.id),
            };
            (disk.id, entry)
        })
        .collect();

    Selection {
        config_selection,
        disk_selection,
    }
}
