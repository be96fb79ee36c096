use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clone_core::apply;
use clone_core::ApiError;
use clone_core::error_map;
use clone_core::estimate_clone_duration_with;
use clone_core::preselection_actions;
use clone_core::CloneAction;
use clone_core::CloneSettings;
use clone_core::CloneState;
use clone_core::CloneSummary;
use clone_core::EstimateMode;
use clone_core::Readiness;
use clone_exec::submit_clone;
use clone_exec::CloneEffect;
use clone_exec::SimulatedCloneClient;
use tracing_subscriber::EnvFilter;

mod inventory;

use inventory::Inventory;

/// clonectl - pick configuration profiles and disks and clone them
#[derive(Parser)]
#[command(name = "clonectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to the user config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate how long copying the given amount of data takes
    Estimate {
        /// Total size in MiB
        #[arg(long)]
        size: u64,

        #[arg(long, value_enum, default_value_t = ModeArg::Same)]
        mode: ModeArg,
    },

    /// Show what a clone of the selection would copy
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Send the clone through the simulated API client
    Submit {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Make the simulated API reject the request with this reason
        #[arg(long)]
        fail: Option<String>,

        /// Field the rejection is reported against
        #[arg(long, requires = "fail")]
        fail_field: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Same,
    Different,
}

impl From<ModeArg> for EstimateMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Same => Self::SameLocation,
            ModeArg::Different => Self::DifferentLocation,
        }
    }
}

#[derive(clap::Args)]
struct SelectionArgs {
    /// Inventory file (JSON, or YAML by extension)
    #[arg(long)]
    inventory: PathBuf,

    /// Configuration profile to select (repeatable)
    #[arg(long = "config")]
    configs: Vec<u64>,

    /// Disk to select (repeatable)
    #[arg(long = "disk")]
    disks: Vec<u64>,

    /// Destination machine
    #[arg(long)]
    target: Option<u64>,

    /// Deep-link query string, e.g. "?selectedConfig=1000"
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let settings = CloneSettings::load_or_default(cli.settings.as_deref())?;

    match cli.command {
        Commands::Estimate { size, mode } => {
            println!(
                "{}",
                estimate_clone_duration_with(&settings.estimate, size, mode.into())
            );
            Ok(())
        }
        Commands::Plan { selection } => cmd_plan(&selection, &settings),
        Commands::Submit {
            selection,
            fail,
            fail_field,
        } => cmd_submit(&selection, &settings, fail, fail_field),
    }
}

/// Loads the inventory and replays the selection the way the clone screen
/// would: resync, deep-link toggles, explicit toggles, then the target.
fn load_session(args: &SelectionArgs) -> Result<(Inventory, CloneState)> {
    let inventory = load_inventory(&args.inventory)?;
    tracing::debug!(
        source = inventory.linode.id,
        configs = inventory.configs.len(),
        disks = inventory.disks.len(),
        "loaded inventory"
    );
    let mut state = CloneState::new();

    apply(
        &mut state,
        CloneAction::SyncConfigsDisks {
            configs: inventory.configs.clone(),
            disks: inventory.disks.clone(),
        },
    );
    let deep_link = args
        .query
        .as_deref()
        .map(preselection_actions)
        .unwrap_or_default();
    let toggles = args
        .configs
        .iter()
        .map(|id| CloneAction::ToggleConfig(*id))
        .chain(args.disks.iter().map(|id| CloneAction::ToggleDisk(*id)));
    for action in deep_link.into_iter().chain(toggles) {
        apply(&mut state, action);
    }
    if let Some(target) = args.target {
        if !inventory.linodes.iter().any(|linode| linode.id == target) {
            bail!("unknown target machine {target}");
        }
        apply(&mut state, CloneAction::SetSelectedTargetMachineId(Some(target)));
    }

    Ok((inventory, state))
}

fn load_inventory(path: &Path) -> Result<Inventory> {
    Inventory::load(path).with_context(|| format!("loading inventory {}", path.display()))
}

fn cmd_plan(args: &SelectionArgs, settings: &CloneSettings) -> Result<()> {
    let (inventory, state) = load_session(args)?;
    let summary = CloneSummary::derive(
        &state,
        &inventory.linode,
        &inventory.configs,
        &inventory.disks,
        &inventory.linodes,
        &settings.estimate,
    );

    println!("Source: {} ({})", inventory.linode.label, inventory.linode.region);
    match summary.mode {
        Some(mode) => println!("Mode: {}", mode.label()),
        None => println!("Mode: no destination selected"),
    }
    for extended in &summary.selected_configs {
        println!("Config {} ({})", extended.config.id, extended.config.label);
        for disk in &extended.associated_disks {
            println!("  disk {} {} ({} MiB)", disk.id, disk.label, disk.size);
        }
    }
    for disk in &summary.standalone_disks {
        println!("Disk {} {} ({} MiB)", disk.id, disk.label, disk.size);
    }
    println!("Total: {} MiB", summary.total_size_mib);
    println!(
        "Estimated time: {} ({})",
        summary.estimate,
        summary.estimate_mode.label()
    );
    match summary.readiness {
        Readiness::Ready => println!("Ready to clone"),
        Readiness::Blocked(reason) => println!("Blocked: {}", reason.label()),
    }
    Ok(())
}

fn cmd_submit(
    args: &SelectionArgs,
    settings: &CloneSettings,
    fail: Option<String>,
    fail_field: Option<String>,
) -> Result<()> {
    let (inventory, mut state) = load_session(args)?;

    if let Readiness::Blocked(reason) = Readiness::evaluate(&state, inventory.linode.id) {
        bail!("cannot clone: {}", reason.label());
    }

    let client = match fail {
        Some(reason) => SimulatedCloneClient::rejecting(vec![ApiError {
            reason,
            field: fail_field,
        }]),
        None => SimulatedCloneClient::new(),
    };
    let effects = submit_clone(
        &mut state,
        inventory.linode.id,
        &inventory.configs,
        &inventory.disks,
        &client,
        &settings.navigation,
    );

    if let Some(errors) = state.errors.as_deref() {
        let map = error_map(&["disk_size"], Some(errors));
        if let Some(reason) = map.get("disk_size") {
            eprintln!("disk_size: {reason}");
        }
        if let Some(reason) = map.none.as_deref() {
            eprintln!("{reason}");
        }
        bail!("clone rejected");
    }

    for request in client.requests() {
        println!("Sent: {}", serde_json::to_string(&request)?);
    }
    for effect in effects {
        match effect {
            CloneEffect::ResetEventsPolling => println!("Watching for clone events"),
            CloneEffect::Navigate { path } => println!("Next: {path}"),
        }
    }
    Ok(())
}
