use serde::Serialize;
use serde_json::{json, Value};

/// A named way of thinking, described by six orthogonal traits.
///
/// Canonical modes are `const` values; the set is closed and the names
/// are unique by construction of [`MODE_REGISTRY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CognitiveMode {
    pub name: &'static str,
    pub description: &'static str,

    pub structured: bool,
    pub exploratory: bool,
    pub deterministic: bool,
    pub critical: bool,
    pub generative: bool,
    pub summarizing: bool,

    pub notes: &'static str,
}

impl CognitiveMode {
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "traits": {
                "structured": self.structured,
                "exploratory": self.exploratory,
                "deterministic": self.deterministic,
                "critical": self.critical,
                "generative": self.generative,
                "summarizing": self.summarizing,
            },
            "notes": self.notes,
        })
    }
}

const fn mode(name: &'static str, description: &'static str) -> CognitiveMode {
    CognitiveMode {
        name,
        description,
        structured: false,
        exploratory: false,
        deterministic: false,
        critical: false,
        generative: false,
        summarizing: false,
        notes: "",
    }
}

pub const EXPLAIN_MODE: CognitiveMode = CognitiveMode {
    structured: true,
    deterministic: true,
    ..mode("explain", "Describe existing material precisely")
};

pub const DIAGNOSE_MODE: CognitiveMode = CognitiveMode {
    structured: true,
    deterministic: true,
    critical: true,
    ..mode("diagnose", "Locate the cause of a reported problem")
};

pub const PLAN_MODE: CognitiveMode = CognitiveMode {
    structured: true,
    deterministic: true,
    ..mode("plan", "Produce an ordered, actionable plan")
};

pub const DECIDE_MODE: CognitiveMode = CognitiveMode {
    deterministic: true,
    critical: true,
    ..mode("decide", "Commit to one option among alternatives")
};

pub const EXPLORE_MODE: CognitiveMode = CognitiveMode {
    exploratory: true,
    generative: true,
    ..mode("explore", "Survey plausible alternatives broadly")
};

pub const SUMMARIZE_MODE: CognitiveMode = CognitiveMode {
    deterministic: true,
    summarizing: true,
    ..mode("summarize", "Condense without inventing content")
};

pub const GENERATE_MODE: CognitiveMode = CognitiveMode {
    generative: true,
    ..mode("generate", "Produce new content under constraints")
};

/// Every canonical mode, keyed by name.
pub const MODE_REGISTRY: &[(&str, &CognitiveMode)] = &[
    ("explain", &EXPLAIN_MODE),
    ("diagnose", &DIAGNOSE_MODE),
    ("plan", &PLAN_MODE),
    ("decide", &DECIDE_MODE),
    ("explore", &EXPLORE_MODE),
    ("summarize", &SUMMARIZE_MODE),
    ("generate", &GENERATE_MODE),
];

pub fn mode_by_name(name: &str) -> Option<&'static CognitiveMode> {
    MODE_REGISTRY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, mode)| *mode)
}
