//! Askama templates for the web frontend.

use askama::Template;

use crate::content::{
    ACCESSIBILITY_CATEGORIES, AccessibilityCategory, Feature, HIGHLIGHTS, INCLUSIVE_FEATURES,
    TRAVEL_MODES, TravelMode, VALUES,
};
use crate::domain::{AccessibilityNeed, OptimizeFor, Step, StepKind, TravelPlan};

/// Preference pre-selected on the planning form.
pub const DEFAULT_FORM_PREFERENCE: OptimizeFor = OptimizeFor::Budget;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub travel_modes: &'static [TravelMode],
    pub highlights: &'static [Feature],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            travel_modes: &TRAVEL_MODES,
            highlights: &HIGHLIGHTS,
        }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub values: &'static [Feature],
}

impl Default for AboutTemplate {
    fn default() -> Self {
        Self { values: &VALUES }
    }
}

/// Accessibility features page.
#[derive(Template)]
#[template(path = "accessibility.html")]
pub struct AccessibilityTemplate {
    pub categories: &'static [AccessibilityCategory],
    pub inclusive_features: &'static [Feature],
}

impl Default for AccessibilityTemplate {
    fn default() -> Self {
        Self {
            categories: &ACCESSIBILITY_CATEGORIES,
            inclusive_features: &INCLUSIVE_FEATURES,
        }
    }
}

/// Plan-journey page with the planning form.
#[derive(Template)]
#[template(path = "plan.html")]
pub struct PlanJourneyTemplate {
    pub optimize_options: Vec<ToggleView>,
    pub accessibility_options: Vec<ToggleView>,
}

impl Default for PlanJourneyTemplate {
    fn default() -> Self {
        let optimize_options = OptimizeFor::ALL
            .iter()
            .map(|o| ToggleView {
                value: o.as_str(),
                label: o.label(),
                selected: *o == DEFAULT_FORM_PREFERENCE,
            })
            .collect();

        let accessibility_options = AccessibilityNeed::ALL
            .iter()
            .map(|n| ToggleView {
                value: n.as_str(),
                label: n.label(),
                selected: false,
            })
            .collect();

        Self {
            optimize_options,
            accessibility_options,
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Plan results fragment.
#[derive(Template)]
#[template(path = "plan_result.html")]
pub struct PlanResultTemplate {
    pub plan: PlanView,
    pub notice: Notice,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A toggle button on the planning form.
#[derive(Debug, Clone)]
pub struct ToggleView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Toast shown after a submission.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub fn plan_generated() -> Self {
        Self {
            title: "Plan generated!",
            description: "Your journey has been planned successfully.",
        }
    }
}

/// Plan view model for templates.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub duration: String,
    pub cost_display: String,
    pub comfort_score: u8,
    /// One CSS class per comfort bar, filled up to the score.
    pub comfort_bars: Vec<&'static str>,
    pub steps: Vec<StepView>,
    pub accessibility_notes: Vec<String>,
}

impl PlanView {
    /// Maximum comfort score, one bar each.
    const COMFORT_BARS: u8 = 5;

    /// Create from a domain TravelPlan.
    pub fn from_plan(plan: &TravelPlan) -> Self {
        let comfort_bars = (0..Self::COMFORT_BARS)
            .map(|i| {
                if i < plan.comfort_score() {
                    "bar filled"
                } else {
                    "bar"
                }
            })
            .collect();

        let last = plan.steps().len().saturating_sub(1);
        let steps = plan
            .steps()
            .iter()
            .enumerate()
            .map(|(i, s)| StepView::from_step(s, i == last))
            .collect();

        Self {
            origin: plan.origin().to_string(),
            destination: plan.destination().to_string(),
            date: plan.formatted_date().to_string(),
            duration: plan.duration().to_string(),
            cost_display: format!("₹{}", plan.cost()),
            comfort_score: plan.comfort_score(),
            comfort_bars,
            steps,
            accessibility_notes: plan.accessibility_notes().to_vec(),
        }
    }
}

/// Step view model.
#[derive(Debug, Clone)]
pub struct StepView {
    /// Icon name for the step marker
    pub icon: &'static str,
    pub title: String,
    pub time: String,
    pub description: String,
    pub accessibility_note: Option<String>,
    /// The last step has no connector line below it.
    pub is_last: bool,
}

impl StepView {
    /// Create from a domain Step.
    pub fn from_step(step: &Step, is_last: bool) -> Self {
        let icon = match step.kind {
            StepKind::Depart | StepKind::Arrive => "map-pin",
            StepKind::Transit => "clock",
        };

        Self {
            icon,
            title: step.title.clone(),
            time: step.time_label.clone(),
            description: step.description.clone(),
            accessibility_note: step.accessibility_note.clone(),
            is_last,
        }
    }
}
