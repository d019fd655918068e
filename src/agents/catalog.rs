use std::collections::BTreeMap;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{NoesisError, Result};

use super::spec::AgentSpec;

/// Read-only registry of [`AgentSpec`]s, keyed by unique name.
///
/// The reasoning core consumes this through narrow queries (does this
/// role exist, which agents declare this domain) and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct AgentCatalog {
    agents: BTreeMap<String, AgentSpec>,
}

impl AgentCatalog {
    /// Builds a catalog, rejecting duplicate agent names.
    pub fn new<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = AgentSpec>,
    {
        let mut agents = BTreeMap::new();
        for spec in specs {
            if agents.contains_key(&spec.name) {
                return Err(NoesisError::DuplicateAgent(spec.name));
            }
            agents.insert(spec.name.clone(), spec);
        }
        debug!(count = agents.len(), "agent catalog built");
        Ok(Self { agents })
    }

    pub fn get(&self, name: &str) -> Option<&AgentSpec> {
        self.agents.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All specs, sorted by name.
    pub fn all(&self) -> Vec<&AgentSpec> {
        self.agents.values().collect()
    }

    /// Agents declaring `domain`, sorted by name.
    pub fn by_domain(&self, domain: &str) -> Vec<&AgentSpec> {
        self.agents
            .values()
            .filter(|spec| spec.domains.contains(domain))
            .collect()
    }

    pub fn planners(&self) -> Vec<&AgentSpec> {
        self.agents.values().filter(|s| s.is_planner).collect()
    }

    pub fn executors(&self) -> Vec<&AgentSpec> {
        self.agents.values().filter(|s| s.is_executor).collect()
    }

    pub fn observers(&self) -> Vec<&AgentSpec> {
        self.agents.values().filter(|s| s.is_observer).collect()
    }

    pub fn system_agents(&self) -> Vec<&AgentSpec> {
        self.agents.values().filter(|s| s.is_system).collect()
    }

    /// Complete serializable snapshot of the catalog.
    pub fn to_value(&self) -> Value {
        let agents: BTreeMap<&str, Value> = self
            .agents
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.to_value()))
            .collect();
        json!({
            "total_agents": self.agents.len(),
            "agents": agents,
        })
    }
}

/// The canonical agents matching the router's suggested roles.
pub fn builtin_catalog() -> AgentCatalog {
    let specs = vec![
        AgentSpec::new("planner", "Expands approved goals into ordered plans", ["workflow"])
            .planner()
            .with_capabilities(["plan.build", "plan.review"]),
        AgentSpec::new("analyzer", "Examines code and output to explain behavior", ["code", "analysis"])
            .observer()
            .with_capabilities(["code.read", "analysis.report"]),
        AgentSpec::new("validator", "Checks outputs against declared issues", ["code", "quality"])
            .observer()
            .with_capabilities(["issues.triage", "quality.check"]),
        AgentSpec::new("executor", "Carries out validated plan steps", ["code"])
            .executor()
            .with_capabilities(["code.read", "code.write"]),
        AgentSpec::new("observer", "Watches execution and records events", ["logs"])
            .observer()
            .with_capabilities(["events.read"]),
        AgentSpec::new("system", "Internal coordination agent", ["system"])
            .system()
            .with_capabilities(["lifecycle.read"]),
    ];

    // The literal list above has unique names; construction cannot fail.
    AgentCatalog::new(specs).unwrap_or_default()
}
