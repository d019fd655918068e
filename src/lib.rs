pub mod agents;
pub mod error;
pub mod introspection;
pub mod llm;
pub mod memory;
pub mod reasoning;

pub use agents::{builtin_catalog, AgentCapabilities, AgentCatalog, AgentSpec};
pub use error::{NoesisError, Result};
pub use introspection::introspect;
pub use memory::{MemoryContract, MemoryKind, MemoryScope, MemoryUsageMode, MemoryUsagePolicy};
pub use reasoning::{
    Decision, DecisionContext, DecisionPolicy, DefaultDecisionPolicy, GraphSnapshot, Intent,
    ModelOutput, PlanStep, Planner, PolicyConfig, RawAction, Router, RoutingDecision, TaskGraph,
    TaskNode,
};
