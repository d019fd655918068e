use serde::Serialize;
use serde_json::{json, Value};

/// A cognitive role with explicit capability flags. Role separation is
/// declared, never inferred: a role can do exactly what its flags say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CognitiveRole {
    pub name: &'static str,
    pub description: &'static str,

    pub can_plan: bool,
    pub can_execute: bool,
    pub can_observe: bool,
    pub can_decide: bool,
    pub is_system: bool,

    pub notes: &'static str,
}

impl CognitiveRole {
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "capabilities": {
                "plan": self.can_plan,
                "execute": self.can_execute,
                "observe": self.can_observe,
                "decide": self.can_decide,
            },
            "system": self.is_system,
            "notes": self.notes,
        })
    }
}

const fn role(name: &'static str, description: &'static str) -> CognitiveRole {
    CognitiveRole {
        name,
        description,
        can_plan: false,
        can_execute: false,
        can_observe: false,
        can_decide: false,
        is_system: false,
        notes: "",
    }
}

/// Coordinates the runtime; never plans or executes.
pub const SYSTEM_ROLE: CognitiveRole = CognitiveRole {
    can_observe: true,
    is_system: true,
    ..role("system", "Runtime coordination")
};

/// Plans but never executes.
pub const PLANNER_ROLE: CognitiveRole = CognitiveRole {
    can_plan: true,
    ..role("planner", "Expands goals into ordered plans")
};

pub const ANALYZER_ROLE: CognitiveRole = CognitiveRole {
    can_observe: true,
    ..role("analyzer", "Explains material without changing it")
};

/// May decide but never execute.
pub const VALIDATOR_ROLE: CognitiveRole = CognitiveRole {
    can_observe: true,
    can_decide: true,
    ..role("validator", "Judges outputs against reported issues")
};

/// Executes but neither plans nor decides.
pub const EXECUTOR_ROLE: CognitiveRole = CognitiveRole {
    can_execute: true,
    ..role("executor", "Carries out validated plan steps")
};

pub const OBSERVER_ROLE: CognitiveRole = CognitiveRole {
    can_observe: true,
    ..role("observer", "Records events without intervening")
};

/// Every canonical role, keyed by name.
pub const ROLE_REGISTRY: &[(&str, &CognitiveRole)] = &[
    ("system", &SYSTEM_ROLE),
    ("planner", &PLANNER_ROLE),
    ("analyzer", &ANALYZER_ROLE),
    ("validator", &VALIDATOR_ROLE),
    ("executor", &EXECUTOR_ROLE),
    ("observer", &OBSERVER_ROLE),
];

pub fn role_by_name(name: &str) -> Option<&'static CognitiveRole> {
    ROLE_REGISTRY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, role)| *role)
}
