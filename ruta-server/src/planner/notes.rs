//! Accessibility annotations.

use crate::domain::{AccessibilityNeed, AccessibilityNeeds};

/// Plan-level note for a need.
pub fn plan_note(need: AccessibilityNeed) -> &'static str {
    match need {
        AccessibilityNeed::Wheelchair => "Wheelchair accessible route",
        AccessibilityNeed::Blind => "Voice navigation available",
        AccessibilityNeed::Deaf => "Visual alerts for announcements",
        AccessibilityNeed::SpeechImpaired => "Text-to-speech communication",
        AccessibilityNeed::ElderlyFriendly => "Minimal walking required",
        AccessibilityNeed::NoiseMinimal => "Quiet zones available",
    }
}

/// One note per present need, in the fixed need order.
pub fn plan_notes(needs: &AccessibilityNeeds) -> Vec<String> {
    needs.iter().map(|n| plan_note(n).to_string()).collect()
}

/// Note for the departure step.
pub fn depart_note(needs: &AccessibilityNeeds) -> Option<&'static str> {
    needs
        .contains(AccessibilityNeed::Wheelchair)
        .then_some("Wheelchair accessible pickup point")
}

/// Note for the transit step. Deaf wording wins over blind wording.
pub fn transit_note(needs: &AccessibilityNeeds) -> Option<&'static str> {
    if needs.contains(AccessibilityNeed::Deaf) {
        Some("Visual announcements for all stops")
    } else if needs.contains(AccessibilityNeed::Blind) {
        Some("Audio guidance available")
    } else {
        None
    }
}

/// Note for the arrival step.
pub fn arrive_note(needs: &AccessibilityNeeds) -> Option<&'static str> {
    needs
        .contains(AccessibilityNeed::ElderlyFriendly)
        .then_some("Assistance available at arrival")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn needs(list: &[AccessibilityNeed]) -> AccessibilityNeeds {
        list.iter().copied().collect()
    }

    #[test]
    fn plan_notes_follow_need_order() {
        let set = needs(&[AccessibilityNeed::NoiseMinimal, AccessibilityNeed::Wheelchair]);
        assert_eq!(
            plan_notes(&set),
            vec!["Wheelchair accessible route", "Quiet zones available"]
        );
    }

    #[test]
    fn plan_notes_empty() {
        assert!(plan_notes(&AccessibilityNeeds::new()).is_empty());
    }

    #[test]
    fn transit_prefers_deaf() {
        let both = needs(&[AccessibilityNeed::Blind, AccessibilityNeed::Deaf]);
        assert_eq!(
            transit_note(&both),
            Some("Visual announcements for all stops")
        );

        let blind = needs(&[AccessibilityNeed::Blind]);
        assert_eq!(transit_note(&blind), Some("Audio guidance available"));

        let neither = needs(&[AccessibilityNeed::Wheelchair]);
        assert_eq!(transit_note(&neither), None);
    }

    #[test]
    fn depart_and_arrive_notes() {
        let set = needs(&[AccessibilityNeed::Wheelchair]);
        assert_eq!(depart_note(&set), Some("Wheelchair accessible pickup point"));
        assert_eq!(arrive_note(&set), None);

        let set = needs(&[AccessibilityNeed::ElderlyFriendly]);
        assert_eq!(depart_note(&set), None);
        assert_eq!(arrive_note(&set), Some("Assistance available at arrival"));
    }
}
