//! Itinerary planner.
//!
//! Produces a canned three-step travel plan from a request. Durations,
//! costs and comfort scores come from a fixed preset per optimization
//! preference; accessibility needs only add notes to the plan and its
//! steps. Each table lives in its own module so it can be tested alone.

mod config;
mod generate;
mod notes;
mod presets;
mod steps;

pub use config::PlannerConfig;
pub use generate::{ItineraryPlanner, generate_plan};
pub use presets::{DEFAULT_PRESET, Preset, preset_for};
