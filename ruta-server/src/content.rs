//! Static page content.
//!
//! Everything the presentational pages show that is not a plan lives here
//! as typed tables, so templates only iterate.

/// A mode of transport covered by the planner.
#[derive(Debug, Clone, Copy)]
pub struct TravelMode {
    pub name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

/// A single titled feature.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A group of accessibility features for one kind of traveler.
#[derive(Debug, Clone, Copy)]
pub struct AccessibilityCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [Feature; 3],
}

pub const TRAVEL_MODES: [TravelMode; 4] = [
    TravelMode {
        name: "Buses",
        description: "Track government and private buses in real-time with accurate fare estimates",
        features: [
            "Live RTC bus tracking",
            "Accessible seating options",
            "Route optimization",
        ],
    },
    TravelMode {
        name: "Trains",
        description: "Get real-time updates on train schedules, platform changes, and accessibility options",
        features: [
            "Station accessibility details",
            "Seat availability alerts",
            "Wheelchair assistance",
        ],
    },
    TravelMode {
        name: "Flights",
        description: "Compare flights with accessibility ratings and special assistance options",
        features: [
            "Special assistance booking",
            "Terminal navigation guides",
            "Airline accessibility ratings",
        ],
    },
    TravelMode {
        name: "Cabs & Rentals",
        description: "Book accessible vehicles with drivers trained to assist travelers with disabilities",
        features: [
            "Wheelchair accessible vehicles",
            "Trained drivers",
            "Door-to-door service",
        ],
    },
];

pub const ACCESSIBILITY_CATEGORIES: [AccessibilityCategory; 3] = [
    AccessibilityCategory {
        title: "Visual Accessibility",
        description: "Features designed for blind and visually impaired travelers",
        features: [
            Feature {
                title: "Voice Navigation",
                description: "AI-powered voice guidance for safe travel",
            },
            Feature {
                title: "Screen Reader Compatibility",
                description: "Fully compliant with screen readers",
            },
            Feature {
                title: "High Contrast Mode",
                description: "Enhanced visibility options",
            },
        ],
    },
    AccessibilityCategory {
        title: "Hearing Accessibility",
        description: "Tools for deaf and hard-of-hearing travelers",
        features: [
            Feature {
                title: "Visual Alerts",
                description: "Flash notifications for important updates",
            },
            Feature {
                title: "Live Transcription",
                description: "Convert announcements to text instantly",
            },
            Feature {
                title: "Sign Language Support",
                description: "AI interpretation of sign language",
            },
        ],
    },
    AccessibilityCategory {
        title: "Speech Accessibility",
        description: "Solutions for mute and speech-impaired travelers",
        features: [
            Feature {
                title: "Text-to-Speech",
                description: "Convert written text to spoken words",
            },
            Feature {
                title: "Symbol Communication",
                description: "Visual tools for complex situations",
            },
            Feature {
                title: "Pre-set Phrases",
                description: "Quick access to common travel needs",
            },
        ],
    },
];

/// Platform-wide accessibility commitments shown below the categories.
pub const INCLUSIVE_FEATURES: [Feature; 4] = [
    Feature {
        title: "Crowdsourced Accessibility Data",
        description: "Community-driven information about the accessibility of venues, transport, and services across India",
    },
    Feature {
        title: "Multi-language Support",
        description: "Use RUTA in multiple Indian languages, making it accessible to non-English speakers",
    },
    Feature {
        title: "Wheelchair-Friendly Routes",
        description: "Find paths that are accessible for wheelchair users with information about ramps, elevators, and accessible entrances",
    },
    Feature {
        title: "Customizable Interface",
        description: "Adjust font sizes, color schemes, and interaction methods to suit your specific needs",
    },
];

/// Reasons to choose RUTA, shown on the home page.
pub const HIGHLIGHTS: [Feature; 3] = [
    Feature {
        title: "India's First Truly Accessible Travel App",
        description: "Built from the ground up with accessibility as a core principle, not an afterthought",
    },
    Feature {
        title: "Real-Time Route & Bus Tracking",
        description: "Live updates on government RTC buses, trains, and other transport options",
    },
    Feature {
        title: "Inclusive Travel for Everyone",
        description: "Specialized features for blind, deaf, and mute travelers alongside standard travel tools",
    },
];

/// Company values on the about page.
pub const VALUES: [Feature; 5] = [
    Feature {
        title: "Inclusivity",
        description: "We design for everyone, regardless of ability, language, or background",
    },
    Feature {
        title: "Innovation",
        description: "We leverage cutting-edge technology to solve complex accessibility challenges",
    },
    Feature {
        title: "Empowerment",
        description: "We believe in giving people the tools to travel independently and confidently",
    },
    Feature {
        title: "Affordability",
        description: "We make smart travel planning accessible across all economic backgrounds",
    },
    Feature {
        title: "Community",
        description: "We build and nurture a supportive network of inclusive travelers",
    },
];
