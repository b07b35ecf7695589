//! Plan generation.

use tracing::debug;

use crate::domain::{TravelPlan, TravelRequest, format_travel_date};

use super::notes::plan_notes;
use super::presets::preset_for;
use super::steps::build_steps;

/// Turns travel requests into travel plans.
///
/// The planner holds no state; every call is independent and it is safe
/// to share one instance across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryPlanner;

impl ItineraryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Generate a plan for the request.
    ///
    /// This never fails. Empty or malformed fields are carried into the
    /// plan as they are.
    pub fn generate_plan(&self, request: &TravelRequest) -> TravelPlan {
        let preset = preset_for(request.optimize_for);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            optimize_for = ?request.optimize_for,
            needs = request.accessibility_needs.len(),
            "generating plan"
        );

        TravelPlan::new(
            request.origin.clone(),
            request.destination.clone(),
            format_travel_date(&request.date),
            preset.duration.to_string(),
            preset.cost,
            preset.comfort_score,
            build_steps(request),
            plan_notes(&request.accessibility_needs),
        )
    }
}

/// Generate a plan with a default [`ItineraryPlanner`].
pub fn generate_plan(request: &TravelRequest) -> TravelPlan {
    ItineraryPlanner::new().generate_plan(request)
}
