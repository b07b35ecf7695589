//! Travel request types.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown optimization preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown optimization preference: {0}")]
pub struct ParseOptimizeForError(String);

/// Error returned when parsing an unknown accessibility need.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown accessibility need: {0}")]
pub struct ParseAccessibilityNeedError(String);

/// What the traveler wants the plan optimized for.
///
/// Exactly one preference is active per request. A request with no
/// preference gets the balanced default preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptimizeFor {
    Time,
    Budget,
    Comfort,
}

impl OptimizeFor {
    /// All preferences, in the order the form offers them.
    pub const ALL: [OptimizeFor; 3] = [
        OptimizeFor::Time,
        OptimizeFor::Budget,
        OptimizeFor::Comfort,
    ];

    /// Wire name, e.g. `"budget"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeFor::Time => "time",
            OptimizeFor::Budget => "budget",
            OptimizeFor::Comfort => "comfort",
        }
    }

    /// Label shown on the form toggle.
    pub fn label(&self) -> &'static str {
        match self {
            OptimizeFor::Time => "Time",
            OptimizeFor::Budget => "Budget",
            OptimizeFor::Comfort => "Comfort",
        }
    }
}

impl fmt::Display for OptimizeFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizeFor {
    type Err = ParseOptimizeForError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(OptimizeFor::Time),
            "budget" => Ok(OptimizeFor::Budget),
            "comfort" => Ok(OptimizeFor::Comfort),
            other => Err(ParseOptimizeForError(other.to_string())),
        }
    }
}

/// A traveler's access requirement.
///
/// The declaration order is significant: `Ord` follows it, so an
/// [`AccessibilityNeeds`] set always iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityNeed {
    Wheelchair,
    Blind,
    Deaf,
    SpeechImpaired,
    ElderlyFriendly,
    NoiseMinimal,
}

impl AccessibilityNeed {
    /// All needs in their fixed order.
    pub const ALL: [AccessibilityNeed; 6] = [
        AccessibilityNeed::Wheelchair,
        AccessibilityNeed::Blind,
        AccessibilityNeed::Deaf,
        AccessibilityNeed::SpeechImpaired,
        AccessibilityNeed::ElderlyFriendly,
        AccessibilityNeed::NoiseMinimal,
    ];

    /// Wire name, e.g. `"speechImpaired"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessibilityNeed::Wheelchair => "wheelchair",
            AccessibilityNeed::Blind => "blind",
            AccessibilityNeed::Deaf => "deaf",
            AccessibilityNeed::SpeechImpaired => "speechImpaired",
            AccessibilityNeed::ElderlyFriendly => "elderlyFriendly",
            AccessibilityNeed::NoiseMinimal => "noiseMinimal",
        }
    }

    /// Label shown on the form toggle.
    pub fn label(&self) -> &'static str {
        match self {
            AccessibilityNeed::Wheelchair => "Wheelchair Access",
            AccessibilityNeed::Blind => "Visual Assistance",
            AccessibilityNeed::Deaf => "Hearing Assistance",
            AccessibilityNeed::SpeechImpaired => "Speech Assistance",
            AccessibilityNeed::ElderlyFriendly => "Elderly Friendly",
            AccessibilityNeed::NoiseMinimal => "Minimal Noise",
        }
    }
}

impl fmt::Display for AccessibilityNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessibilityNeed {
    type Err = ParseAccessibilityNeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessibilityNeed::ALL
            .into_iter()
            .find(|need| need.as_str() == s)
            .ok_or_else(|| ParseAccessibilityNeedError(s.to_string()))
    }
}

/// A set of accessibility needs.
///
/// Duplicates collapse and iteration order is the fixed order of
/// [`AccessibilityNeed`], regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessibilityNeeds(BTreeSet<AccessibilityNeed>);

impl AccessibilityNeeds {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a need. Returns `false` if it was already present.
    pub fn insert(&mut self, need: AccessibilityNeed) -> bool {
        self.0.insert(need)
    }

    pub fn contains(&self, need: AccessibilityNeed) -> bool {
        self.0.contains(&need)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in the fixed need order.
    pub fn iter(&self) -> impl Iterator<Item = AccessibilityNeed> + '_ {
        self.0.iter().copied()
    }

    /// Parse wire names, silently dropping any that are not recognized.
    pub fn parse_lenient<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter_map(|v| match v.as_ref().parse::<AccessibilityNeed>() {
                Ok(need) => Some(need),
                Err(e) => {
                    tracing::debug!("ignoring {e}");
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<AccessibilityNeed> for AccessibilityNeeds {
    fn from_iter<T: IntoIterator<Item = AccessibilityNeed>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Unknown wire names are dropped, as with [`AccessibilityNeeds::parse_lenient`].
impl<'de> Deserialize<'de> for AccessibilityNeeds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::parse_lenient(values))
    }
}

/// Read an optional preference, treating unknown values as unset.
fn lenient_optimize_for<'de, D>(deserializer: D) -> Result<Option<OptimizeFor>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v.parse::<OptimizeFor>() {
        Ok(optimize_for) => Some(optimize_for),
        Err(e) => {
            tracing::debug!("ignoring {e}");
            None
        }
    }))
}

/// A structured request for a travel plan.
///
/// The planner does not validate any field; callers that need non-empty
/// locations and dates check them before building the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    /// Starting location label
    pub origin: String,

    /// Destination label
    pub destination: String,

    /// Travel date as entered, normally `YYYY-MM-DD`
    pub date: String,

    /// Selected preference; `None` gets the default preset
    #[serde(default, deserialize_with = "lenient_optimize_for")]
    pub optimize_for: Option<OptimizeFor>,

    /// Requested accessibility needs
    #[serde(default)]
    pub accessibility_needs: AccessibilityNeeds,
}

impl TravelRequest {
    /// Create a request with no preference and no accessibility needs.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            optimize_for: None,
            accessibility_needs: AccessibilityNeeds::new(),
        }
    }

    /// Set the optimization preference.
    pub fn optimize_for(mut self, optimize_for: OptimizeFor) -> Self {
        self.optimize_for = Some(optimize_for);
        self
    }

    /// Add an accessibility need.
    pub fn with_need(mut self, need: AccessibilityNeed) -> Self {
        self.accessibility_needs.insert(need);
        self
    }

    pub fn needs(&self, need: AccessibilityNeed) -> bool {
        self.accessibility_needs.contains(need)
    }
}
