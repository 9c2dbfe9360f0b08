//! Static marketing copy.
//!
//! Everything on the page that is not state lives here. Slides and feature
//! cards are built once at startup and never mutated.

/// One block of the rotating benefits display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub label: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Per-form wording. The hero form and the main waitlist form share the
/// submission flow but not their copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub placeholder: &'static str,
    pub button: &'static str,
    pub button_busy: &'static str,
    pub success: &'static str,
    pub duplicate: &'static str,
    pub error: &'static str,
    pub footnote: &'static str,
}

pub const BRAND: &str = "AI Analyst Engine";
pub const TAGLINE: &str = "Insights engineered for impact.";

pub const HERO_BADGE: &str = "LAUNCHING SOON";
pub const HERO_TITLE: [&str; 2] = ["Insights That Drive", "Decisions"];
pub const HERO_TITLE_ACCENT: &str = "Instantly.";
pub const HERO_SUBTITLE: &str =
    "Your AI analyst delivers tailored, concise business intelligence, no complexity, just clarity.";

pub const FEATURES_BADGE: &str = "CAPABILITIES";
pub const FEATURES_TITLE: &str = "Precision insights.";
pub const FEATURES_TITLE_ACCENT: &str = "Zero complexity.";
pub const FEATURES_SUBTITLE: &str =
    "Our AI engine analyzes, visualizes, and delivers, so you can act faster.";

pub const PROOF_TITLE: &str = "Trusted by forward-thinking teams";

pub const WAITLIST_TITLE: &str = "Ready to see your data differently?";
pub const WAITLIST_SUBTITLE: &str = "Join thousands on the waitlist. Launch access is limited.";

pub const HERO_FORM: FormCopy = FormCopy {
    placeholder: "Enter your work email",
    button: "Join Waitlist",
    button_busy: "Joining...",
    success: "✓ You're on the list! We'll notify you at launch.",
    duplicate: "✓ This email has already been waitlisted!",
    error: "Something went wrong. Please try again.",
    footnote: "Be the first to transform your data into action",
};

pub const MAIN_FORM: FormCopy = FormCopy {
    placeholder: "Enter your work email",
    button: "Secure Your Spot",
    button_busy: "Securing...",
    success: "✓ Success! You're on the waitlist. Check your email for confirmation.",
    duplicate: "✓ This email has already been waitlisted!",
    error: "Something went wrong. Please try again.",
    footnote: "No spam. Just launch updates and early access.",
};

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "▲",
            title: "Real-Time Analysis",
            description: "Live data processing delivers insights the moment they matter, not hours later.",
        },
        Feature {
            icon: "◎",
            title: "Tailored Outputs",
            description: "Customized dashboards and reports that speak your industry's language, automatically.",
        },
        Feature {
            icon: "▤",
            title: "Clear Visualizations",
            description: "Complex data transformed into intuitive visuals that anyone on your team can understand.",
        },
    ]
}

pub fn benefit_slides() -> Vec<Slide> {
    vec![
        Slide {
            label: "EFFICIENCY",
            title: "Hours saved.",
            title_accent: "Decisions accelerated.",
            description: "Stop drowning in spreadsheets. Our engine surfaces what matters, filters what doesn't, and presents insights in seconds.",
            points: &[
                "Automated data aggregation",
                "Instant report generation",
                "Smart anomaly detection",
            ],
        },
        Slide {
            label: "PRECISION",
            title: "Accurate.",
            title_accent: "Actionable. Always.",
            description: "AI-powered analysis that learns your business patterns, delivering reliable insights you can trust for critical decisions.",
            points: &[
                "Machine learning accuracy",
                "Predictive analytics",
                "Contextual recommendations",
            ],
        },
        Slide {
            label: "SCALABILITY",
            title: "Grows with you.",
            title_accent: "Adapts instantly.",
            description: "From startup to enterprise, our platform scales seamlessly. Access insights anywhere, on any device, without compromise.",
            points: &[
                "Multi-device compatibility",
                "Unlimited data processing",
                "Team collaboration tools",
            ],
        },
    ]
}

pub const STATS: [Stat; 3] = [
    Stat { value: "10K+", label: "Early adopters" },
    Stat { value: "94%", label: "Satisfaction rate" },
    Stat { value: "2.5M+", label: "Insights generated" },
];
