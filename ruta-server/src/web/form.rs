//! Planning form validation.
//!
//! The planner accepts anything; this is where incomplete submissions are
//! turned away before a request is built.

use tracing::debug;

use crate::domain::{AccessibilityNeeds, OptimizeFor, TravelRequest};

use super::dto::PlanJourneyRequest;

/// A form submission that cannot be planned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more of from, to and date is empty
    #[error("Incomplete form: Please fill in all required fields.")]
    Incomplete { missing: Vec<&'static str> },
}

impl PlanJourneyRequest {
    /// Names of required fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("from", &self.from), ("to", &self.to), ("date", &self.date)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Check required fields and build a travel request.
    ///
    /// An unknown preference falls back to the unset preset and unknown
    /// accessibility values are dropped.
    pub fn validate(self) -> Result<TravelRequest, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::Incomplete { missing });
        }

        let optimize_for = self
            .optimize_for
            .as_deref()
            .and_then(|value| match value.parse::<OptimizeFor>() {
                Ok(o) => Some(o),
                Err(e) => {
                    debug!("ignoring {e}");
                    None
                }
            });

        Ok(TravelRequest {
            origin: self.from,
            destination: self.to,
            date: self.date,
            optimize_for,
            accessibility_needs: AccessibilityNeeds::parse_lenient(&self.accessibility),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessibilityNeed;

    fn complete() -> PlanJourneyRequest {
        PlanJourneyRequest {
            from: "Delhi".into(),
            to: "Agra".into(),
            date: "2024-05-01".into(),
            optimize_for: Some("budget".into()),
            accessibility: vec![],
        }
    }

    #[test]
    fn complete_form_validates() {
        let req = complete().validate().unwrap();

        assert_eq!(req.origin, "Delhi");
        assert_eq!(req.destination, "Agra");
        assert_eq!(req.date, "2024-05-01");
        assert_eq!(req.optimize_for, Some(OptimizeFor::Budget));
    }

    #[test]
    fn each_required_field_is_checked() {
        let mut no_from = complete();
        no_from.from.clear();
        let mut no_to = complete();
        no_to.to.clear();
        let mut no_date = complete();
        no_date.date.clear();

        for (form, field) in [(no_from, "from"), (no_to, "to"), (no_date, "date")] {
            assert_eq!(
                form.validate(),
                Err(FormError::Incomplete {
                    missing: vec![field]
                })
            );
        }
    }

    #[test]
    fn empty_form_lists_all_missing() {
        let err = PlanJourneyRequest::default().validate().unwrap_err();

        assert_eq!(
            err,
            FormError::Incomplete {
                missing: vec!["from", "to", "date"]
            }
        );
        assert_eq!(
            err.to_string(),
            "Incomplete form: Please fill in all required fields."
        );
    }

    #[test]
    fn unknown_preference_is_unset() {
        let mut form = complete();
        form.optimize_for = Some("luxury".into());
        assert_eq!(form.validate().unwrap().optimize_for, None);

        let mut form = complete();
        form.optimize_for = None;
        assert_eq!(form.validate().unwrap().optimize_for, None);
    }

    #[test]
    fn unknown_needs_are_dropped() {
        let mut form = complete();
        form.accessibility = vec!["noiseMinimal".into(), "".into(), "wheelchair".into()];
        let req = form.validate().unwrap();

        let needs: Vec<_> = req.accessibility_needs.iter().collect();
        assert_eq!(
            needs,
            vec![AccessibilityNeed::Wheelchair, AccessibilityNeed::NoiseMinimal]
        );
    }
}
