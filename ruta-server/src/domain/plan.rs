//! Travel plan types produced by the planner.

use serde::Serialize;

/// Which leg of the itinerary a step describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    Depart,
    Transit,
    Arrive,
}

/// One leg of a synthesized itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,
    pub title: String,
    pub time_label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_note: Option<String>,
}

/// A complete travel plan.
///
/// Plans are immutable once produced: fields are only readable through
/// accessors, and the three steps are always depart, transit, arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    origin: String,
    destination: String,
    formatted_date: String,
    duration: String,
    cost: u32,
    comfort_score: u8,
    steps: [Step; 3],
    accessibility_notes: Vec<String>,
}

impl TravelPlan {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        origin: String,
        destination: String,
        formatted_date: String,
        duration: String,
        cost: u32,
        comfort_score: u8,
        steps: [Step; 3],
        accessibility_notes: Vec<String>,
    ) -> Self {
        debug_assert!((1..=5).contains(&comfort_score));
        Self {
            origin,
            destination,
            formatted_date,
            duration,
            cost,
            comfort_score,
            steps,
            accessibility_notes,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The travel date in display form.
    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    /// Human-readable duration, e.g. "3h 30m".
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Total cost in rupees.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Comfort on a 1 to 5 scale.
    pub fn comfort_score(&self) -> u8 {
        self.comfort_score
    }

    /// The depart, transit and arrive steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn accessibility_notes(&self) -> &[String] {
        &self.accessibility_notes
    }
}
