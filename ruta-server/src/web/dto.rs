//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::TravelPlan;

/// Request to plan a journey, as submitted by the planning form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanJourneyRequest {
    /// Starting location
    #[serde(default)]
    pub from: String,

    /// Destination
    #[serde(default)]
    pub to: String,

    /// Travel date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,

    /// Optimization preference wire name (e.g., "budget")
    #[serde(default)]
    pub optimize_for: Option<String>,

    /// Accessibility need wire names (e.g., "wheelchair")
    #[serde(default)]
    pub accessibility: Vec<String>,
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// The generated plan
    pub plan: TravelPlan,

    /// Confirmation message for the user
    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
