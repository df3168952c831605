//! Event classification over the provider's free-text labels.
//!
//! One ordered rule table serves every consumer: the timeline display,
//! the period aggregator and the stoppage-time estimator all read the
//! same classification, so the three views can never disagree on what
//! an event was.

/// Fixed classification taxonomy for match events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    Goal,
    YellowCard,
    RedCard,
    Card,
    Substitution,
    ShotOnTarget,
    Shot,
    Corner,
    Foul,
    Penalty,
    ThrowIn,
    DangerousAttack,
    Attack,
    Var,
    Other,
}

impl EventClass {
    pub fn label(&self) -> &'static str {
        match self {
            EventClass::Goal => "Goal",
            EventClass::YellowCard => "Yellow Card",
            EventClass::RedCard => "Red Card",
            EventClass::Card => "Card",
            EventClass::Substitution => "Substitution",
            EventClass::ShotOnTarget => "Shot on Target",
            EventClass::Shot => "Shot",
            EventClass::Corner => "Corner",
            EventClass::Foul => "Foul",
            EventClass::Penalty => "Penalty",
            EventClass::ThrowIn => "Throw-in",
            EventClass::DangerousAttack => "Dangerous Attack",
            EventClass::Attack => "Attack",
            EventClass::Var => "VAR",
            EventClass::Other => "Other",
        }
    }
}

/// Ordered rule table, first match wins. Goal must come before the shot
/// variants (goal events usually carry shot-like text), yellow/red before
/// the generic card rule, on-target before the generic shot rule and
/// dangerous-attack before the generic attack rule.
const RULES: &[(&str, EventClass)] = &[
    ("goal", EventClass::Goal),
    ("yellow", EventClass::YellowCard),
    ("red card", EventClass::RedCard),
    ("card", EventClass::Card),
    ("subst", EventClass::Substitution),
    ("on target", EventClass::ShotOnTarget),
    ("shot", EventClass::Shot),
    ("attempt", EventClass::Shot),
    ("corner", EventClass::Corner),
    ("foul", EventClass::Foul),
    ("penalty", EventClass::Penalty),
    ("throw", EventClass::ThrowIn),
    ("dangerous attack", EventClass::DangerousAttack),
    ("attack", EventClass::Attack),
    ("var", EventClass::Var),
];

/// Classify an event from its raw type and detail text.
///
/// Total and deterministic: any input pair maps to exactly one class,
/// absent fields are treated as empty strings.
pub fn classify(kind: &str, detail: &str) -> EventClass {
    let haystack = format!("{} {}", kind, detail).to_lowercase();
    for (pattern, class) in RULES {
        if haystack.contains(pattern) {
            return *class;
        }
    }
    EventClass::Other
}

/// Human-facing label for an event. Matched events use the taxonomy
/// label; unmatched events fall back to the raw type, then the raw
/// detail, then the literal "Other".
pub fn display_label(kind: &str, detail: &str) -> String {
    match classify(kind, detail) {
        EventClass::Other => {
            if !kind.trim().is_empty() {
                kind.trim().to_string()
            } else if !detail.trim().is_empty() {
                detail.trim().to_string()
            } else {
                "Other".to_string()
            }
        }
        class => class.label().to_string(),
    }
}

/// Whether the event text points at an injury or another play
/// interruption. These do not get their own taxonomy class but weigh
/// heavier in the stoppage-time estimate.
pub fn is_interruption(kind: &str, detail: &str, comments: &str) -> bool {
    let haystack = format!("{} {} {}", kind, detail, comments).to_lowercase();
    ["injur", "stoppage", "interruption", "suspended", "delay"]
        .iter()
        .any(|pattern| haystack.contains(pattern))
}
