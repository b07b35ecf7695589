//! Fixed plan presets keyed by optimization preference.

use crate::domain::OptimizeFor;

/// Summary metrics shared by every plan with the same preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Human-readable duration
    pub duration: &'static str,

    /// Cost in rupees
    pub cost: u32,

    /// Comfort on a 1 to 5 scale
    pub comfort_score: u8,
}

/// Preset used when no preference is selected.
pub const DEFAULT_PRESET: Preset = Preset {
    duration: "3h 30m",
    cost: 1200,
    comfort_score: 3,
};

const TIME_PRESET: Preset = Preset {
    duration: "2h 15m",
    cost: 1800,
    comfort_score: 4,
};

const BUDGET_PRESET: Preset = Preset {
    duration: "4h 45m",
    cost: 650,
    comfort_score: 2,
};

const COMFORT_PRESET: Preset = Preset {
    duration: "3h 45m",
    cost: 2200,
    comfort_score: 5,
};

/// Look up the preset for a preference.
pub fn preset_for(optimize_for: Option<OptimizeFor>) -> Preset {
    match optimize_for {
        Some(OptimizeFor::Time) => TIME_PRESET,
        Some(OptimizeFor::Budget) => BUDGET_PRESET,
        Some(OptimizeFor::Comfort) => COMFORT_PRESET,
        None => DEFAULT_PRESET,
    }
}
