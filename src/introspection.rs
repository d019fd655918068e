//! Static self-description of the crate and its agent registry.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::agents::{AgentCatalog, AgentSpec};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deterministic snapshot of the runtime's declarative surface: crate
/// version, serialized agent specs, and domain/role indexes.
///
/// Only spec data is exposed; no runtime state leaks through here.
pub fn introspect(catalog: &AgentCatalog) -> Value {
    let agents: BTreeMap<&str, Value> = catalog
        .all()
        .into_iter()
        .map(|spec| (spec.name.as_str(), spec.to_value()))
        .collect();

    let mut domains: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for spec in catalog.all() {
        for domain in &spec.domains {
            domains.entry(domain.as_str()).or_default().push(spec.name.as_str());
        }
    }

    json!({
        "noesis": {
            "version": VERSION,
            "agent_count": catalog.len(),
        },
        "agents": agents,
        "indexes": {
            "domains": domains,
            "roles": {
                "planner": names(catalog.planners()),
                "executor": names(catalog.executors()),
                "observer": names(catalog.observers()),
                "system": names(catalog.system_agents()),
            },
        },
    })
}

fn names<'a>(specs: Vec<&'a AgentSpec>) -> Vec<&'a str> {
    specs.into_iter().map(|s| s.name.as_str()).collect()
}
