use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const INVENTORY: &str = r#"{
  "linode": {"id": 1, "label": "web-1", "region": "us-east"},
  "linodes": [
    {"id": 2, "label": "web-2", "region": "us-east"},
    {"id": 3, "label": "eu-1", "region": "eu-west"}
  ],
  "configs": [
    {
      "id": 1000,
      "label": "My Config",
      "devices": {
        "sda": {"disk_id": 2000, "volume_id": null},
        "sdb": {"disk_id": null, "volume_id": 77},
        "sdc": null
      }
    }
  ],
  "disks": [
    {"id": 2000, "label": "Ubuntu Disk", "size": 40000},
    {"id": 2001, "label": "Swap", "size": 10000}
  ]
}"#;

fn inventory_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    file.write_all(INVENTORY.as_bytes()).expect("write inventory");
    file
}

fn clonectl() -> Command {
    let mut cmd = Command::cargo_bin("clonectl").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn estimate_prints_duration() {
    clonectl()
        .args(["estimate", "--size", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("37 minutes"));

    clonectl()
        .args(["estimate", "--size", "70000", "--mode", "different"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 hours"));
}

#[test]
fn plan_summarizes_selection() {
    let inventory = inventory_file();

    clonectl()
        .arg("plan")
        .arg("--inventory")
        .arg(inventory.path())
        .args(["--query", "?selectedConfig=1000", "--disk", "2001", "--target", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config 1000 (My Config)"))
        .stdout(predicate::str::contains("disk 2000 Ubuntu Disk"))
        .stdout(predicate::str::contains("Total: 50000 MiB"))
        .stdout(predicate::str::contains("37 minutes (same location)"))
        .stdout(predicate::str::contains("Ready to clone"));
}

#[test]
fn plan_without_target_is_blocked() {
    let inventory = inventory_file();

    clonectl()
        .arg("plan")
        .arg("--inventory")
        .arg(inventory.path())
        .args(["--disk", "2001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocked: Select a destination"));
}

#[test]
fn submit_to_other_machine_navigates() {
    let inventory = inventory_file();

    clonectl()
        .arg("submit")
        .arg("--inventory")
        .arg(inventory.path())
        .args(["--config", "1000", "--target", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\":\"clone_linode\""))
        .stdout(predicate::str::contains("Next: /linodes/1/configurations"));
}

#[test]
fn submit_rejection_reports_field_error() {
    let inventory = inventory_file();

    clonectl()
        .arg("submit")
        .arg("--inventory")
        .arg(inventory.path())
        .args(["--disk", "2001", "--target", "1"])
        .args(["--fail", "Not enough space", "--fail-field", "disk_size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disk_size: Not enough space"));
}

#[test]
fn unknown_target_is_an_error() {
    let inventory = inventory_file();

    clonectl()
        .arg("plan")
        .arg("--inventory")
        .arg(inventory.path())
        .args(["--target", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown target machine 999"));
}
