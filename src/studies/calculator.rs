//! Standard-time arithmetic. Pure functions over study totals.

use crate::db::TIME_UNIT_SECONDS;

use super::aggregator::StudyTotals;

/// Personal 5% + fatigue 4% + delay 3%.
pub const ALLOWANCE_PCT: f64 = 12.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTime {
    pub total_motions: i64,
    pub total_mods: f64,
    pub base_time_seconds: f64,
    pub allowances_pct: f64,
    pub standard_time_seconds: f64,
    pub units_per_hour: u64,
}

/// Rounding only affects the reported values: the allowance is applied to the
/// unrounded base time, and throughput divides by the reported standard time.
pub fn compute(total_mods: f64, total_motions: i64) -> StandardTime {
    let base_time = total_mods * TIME_UNIT_SECONDS;
    let standard_time = base_time * (1.0 + ALLOWANCE_PCT / 100.0);

    let standard_time_seconds = round3(standard_time);
    let units_per_hour = if standard_time_seconds > 0.0 {
        (SECONDS_PER_HOUR / standard_time_seconds).floor() as u64
    } else {
        0
    };

    StandardTime {
        total_motions,
        total_mods,
        base_time_seconds: round3(base_time),
        allowances_pct: ALLOWANCE_PCT,
        standard_time_seconds,
        units_per_hour,
    }
}

pub fn compute_totals(totals: &StudyTotals) -> StandardTime {
    compute(totals.total_mods, totals.total_motions)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
