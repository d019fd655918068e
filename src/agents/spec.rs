use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Declarative description of one agent: identity, declared domains,
/// explicit role flags, capability set, and governance metadata.
///
/// A spec is a static cognitive contract. It carries no runtime behavior
/// and is never mutated after construction; routing, validation, and
/// introspection all depend on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub description: String,

    /// Declared domains, used for routing and filtering. A set: order
    /// must not matter and duplicates must be impossible.
    pub domains: BTreeSet<String>,

    #[serde(default)]
    pub is_planner: bool,
    #[serde(default)]
    pub is_executor: bool,
    #[serde(default)]
    pub is_observer: bool,
    #[serde(default)]
    pub is_system: bool,

    #[serde(default)]
    pub capabilities: BTreeSet<String>,

    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub ui_label: Option<String>,
    #[serde(default)]
    pub ui_group: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl AgentSpec {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            domains: domains.into_iter().map(Into::into).collect(),
            is_planner: false,
            is_executor: false,
            is_observer: false,
            is_system: false,
            capabilities: BTreeSet::new(),
            version: default_version(),
            experimental: false,
            deprecated: false,
            ui_label: None,
            ui_group: None,
        }
    }

    pub fn planner(mut self) -> Self {
        self.is_planner = true;
        self
    }

    pub fn executor(mut self) -> Self {
        self.is_executor = true;
        self
    }

    pub fn observer(mut self) -> Self {
        self.is_observer = true;
        self
    }

    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    pub fn with_ui(mut self, label: impl Into<String>, group: impl Into<String>) -> Self {
        self.ui_label = Some(label.into());
        self.ui_group = Some(group.into());
        self
    }

    /// Serializable snapshot grouping roles, governance, and UI hints.
    /// Exposes only declared semantic fields; sets serialize as sorted
    /// lists so the output is deterministic.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "domains": self.domains,
            "roles": {
                "planner": self.is_planner,
                "executor": self.is_executor,
                "observer": self.is_observer,
                "system": self.is_system,
            },
            "capabilities": self.capabilities,
            "governance": {
                "version": self.version,
                "experimental": self.experimental,
                "deprecated": self.deprecated,
            },
            "ui": {
                "label": self.ui_label,
                "group": self.ui_group,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_groups_roles_governance_and_ui() {
        let spec = AgentSpec::new("dict-agent", "Agent for snapshots", ["test"])
            .planner()
            .with_capabilities(["plan"])
            .with_version("1.0")
            .experimental()
            .with_ui("Dict Agent", "Testing");

        let data = spec.to_value();

        assert_eq!(data["name"], "dict-agent");
        assert_eq!(data["domains"], json!(["test"]));
        assert_eq!(data["roles"]["planner"], true);
        assert_eq!(data["roles"]["executor"], false);
        assert_eq!(data["capabilities"], json!(["plan"]));
        assert_eq!(data["governance"]["version"], "1.0");
        assert_eq!(data["governance"]["experimental"], true);
        assert_eq!(data["governance"]["deprecated"], false);
        assert_eq!(data["ui"]["label"], "Dict Agent");
        assert_eq!(data["ui"]["group"], "Testing");
    }
}
