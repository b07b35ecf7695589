//! Domain types for the journey planner.
//!
//! A [`TravelRequest`] goes in, a [`TravelPlan`] comes out. The request
//! types are closed enums and sets, so anything that reaches the planner
//! is already in its declared input domain.

mod date;
mod plan;
mod request;

pub use date::format_travel_date;
pub use plan::{Step, StepKind, TravelPlan};
pub use request::{
    AccessibilityNeed, AccessibilityNeeds, OptimizeFor, ParseAccessibilityNeedError,
    ParseOptimizeForError, TravelRequest,
};
