//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{ItineraryPlanner, PlannerConfig};

/// Shared application state.
///
/// Nothing here is mutable; plans are never stored.
#[derive(Clone)]
pub struct AppState {
    /// The itinerary planner
    pub planner: ItineraryPlanner,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            planner: ItineraryPlanner::new(),
            config: Arc::new(config),
        }
    }
}
