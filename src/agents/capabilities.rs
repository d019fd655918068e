use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Declarative capability record for an agent: role flags, dependency
/// flags, and the set of capability names it supports.
///
/// Immutable value type; "updates" like [`AgentCapabilities::with_capability`]
/// return a new value and leave the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentCapabilities {
    #[serde(default)]
    pub is_planner: bool,
    #[serde(default)]
    pub is_executor: bool,
    #[serde(default)]
    pub is_observer: bool,
    #[serde(default)]
    pub is_system: bool,

    #[serde(default)]
    pub uses_llm: bool,
    #[serde(default)]
    pub uses_knowledge: bool,

    #[serde(default)]
    pub experimental: bool,

    #[serde(default)]
    pub capabilities: BTreeSet<String>,
}

impl AgentCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only for explicitly declared capabilities.
    pub fn supports(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns a copy with one more capability; all flags are preserved.
    pub fn with_capability(&self, capability: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.capabilities.insert(capability.into());
        next
    }

    pub fn to_value(&self) -> Value {
        json!({
            "roles": {
                "planner": self.is_planner,
                "executor": self.is_executor,
                "observer": self.is_observer,
                "system": self.is_system,
            },
            "dependencies": {
                "llm": self.uses_llm,
                "knowledge": self.uses_knowledge,
            },
            "experimental": self.experimental,
            "capabilities": self.capabilities,
        })
    }
}
