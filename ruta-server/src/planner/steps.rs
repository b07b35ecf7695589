//! Three-step itinerary synthesis.
//!
//! Every plan has the same shape: depart from the origin, a transit leg,
//! and arrive at the destination. The preference picks the mode and
//! timings; accessibility needs only attach notes.

use crate::domain::{OptimizeFor, Step, StepKind, TravelRequest};

use super::notes;

const DEPART_TIME: &str = "10:00 AM";
const TRANSIT_TIME: &str = "10:30 AM - 1:15 PM";
const EXPRESS_ARRIVAL_TIME: &str = "12:15 PM";
const REGULAR_ARRIVAL_TIME: &str = "2:45 PM";

/// Build the depart, transit and arrive steps for a request.
pub fn build_steps(request: &TravelRequest) -> [Step; 3] {
    [
        depart_step(request),
        transit_step(request),
        arrive_step(request),
    ]
}

fn depart_step(request: &TravelRequest) -> Step {
    let origin = &request.origin;
    let description = if request.optimize_for == Some(OptimizeFor::Budget) {
        format!("Take the local RTC bus from {origin} Bus Station")
    } else {
        format!("Take a cab from your location in {origin}")
    };

    Step {
        kind: StepKind::Depart,
        title: format!("Depart from {origin}"),
        time_label: DEPART_TIME.to_string(),
        description,
        accessibility_note: notes::depart_note(&request.accessibility_needs).map(String::from),
    }
}

fn transit_step(request: &TravelRequest) -> Step {
    let destination = &request.destination;
    let (title, description) = if request.optimize_for == Some(OptimizeFor::Time) {
        ("Express Train", format!("High-speed train to {destination}"))
    } else {
        (
            "RTC Bus Journey",
            format!("Regular service to {destination} with 2 stops"),
        )
    };

    Step {
        kind: StepKind::Transit,
        title: title.to_string(),
        time_label: TRANSIT_TIME.to_string(),
        description,
        accessibility_note: notes::transit_note(&request.accessibility_needs).map(String::from),
    }
}

fn arrive_step(request: &TravelRequest) -> Step {
    let destination = &request.destination;
    let time_label = if request.optimize_for == Some(OptimizeFor::Time) {
        EXPRESS_ARRIVAL_TIME
    } else {
        REGULAR_ARRIVAL_TIME
    };
    let terminal = if request.optimize_for == Some(OptimizeFor::Comfort) {
        "Central Station"
    } else {
        "Bus Terminal"
    };

    Step {
        kind: StepKind::Arrive,
        title: format!("Arrive at {destination}"),
        time_label: time_label.to_string(),
        description: format!("Reach {destination} {terminal}"),
        accessibility_note: notes::arrive_note(&request.accessibility_needs).map(String::from),
    }
}
