use serde::Deserialize;
use serde::Serialize;

const MIB_PER_GIB: f64 = 1024.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 24.0 * MINUTES_PER_HOUR;

/// Whether source and destination share a location. Cross-location copies
/// are roughly an order of magnitude slower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMode {
    SameLocation,
    DifferentLocation,
}

impl EstimateMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::SameLocation => "same location",
            Self::DifferentLocation => "different location",
        }
    }
}

/// Copy throughput expressed as minutes needed per GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRates {
    pub same_location_minutes_per_gib: f64,
    pub different_location_minutes_per_gib: f64,
}

impl Default for EstimateRates {
    fn default() -> Self {
        Self {
            same_location_minutes_per_gib: 0.75,
            different_location_minutes_per_gib: 10.0,
        }
    }
}

impl EstimateRates {
    pub fn minutes_per_gib(&self, mode: EstimateMode) -> f64 {
        match mode {
            EstimateMode::SameLocation => self.same_location_minutes_per_gib,
            EstimateMode::DifferentLocation => self.different_location_minutes_per_gib,
        }
    }

    /// Whole minutes, rounded up.
    pub fn minutes_for(&self, total_mib: u64, mode: EstimateMode) -> u64 {
        let minutes = (total_mib as f64 / MIB_PER_GIB) * self.minutes_per_gib(mode);
        if minutes.is_finite() && minutes > 0.0 {
            minutes.ceil() as u64
        } else {
            0
        }
    }
}

/// Human-readable copy time for `total_mib` using the default rates, e.g.
/// `"37 minutes"` or `"11 hours"`.
pub fn estimate_clone_duration(total_mib: u64, mode: EstimateMode) -> String {
    estimate_clone_duration_with(&EstimateRates::default(), total_mib, mode)
}

pub fn estimate_clone_duration_with(
    rates: &EstimateRates,
    total_mib: u64,
    mode: EstimateMode,
) -> String {
    humanize_minutes(rates.minutes_for(total_mib, mode))
}

fn humanize_minutes(minutes: u64) -> String {
    if minutes == 0 {
        return "0 seconds".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let minutes = minutes as f64;
    if minutes < MINUTES_PER_DAY {
        let hours = (minutes / MINUTES_PER_HOUR).round() as u64;
        if hours < 24 {
            return plural(hours, "hour");
        }
        return plural(1, "day");
    }

    plural((minutes / MINUTES_PER_DAY).round() as u64, "day")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
