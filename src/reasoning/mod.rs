//! The reasoning core: routing, governance, planning, and task graphs.
//!
//! Data flow through this module:
//! - `Router::route` classifies raw model output into a `RoutingDecision`
//! - `DecisionPolicy::decide` applies guardrails and yields a `Decision`
//! - on an accepted Plan intent, `Planner::build_plan` expands actions
//!   into ordered `PlanStep`s
//! - callers may seed a `TaskGraph` from the plan and validate it before
//!   handing it to an execution scheduler
//!
//! Everything here is synchronous, deterministic, and total: routing,
//! policy, and planning never fail on malformed input.

mod decision;
mod graph;
mod planner;
mod router;

pub use decision::{Decision, DecisionContext, DecisionPolicy, DefaultDecisionPolicy, PolicyConfig};
pub use graph::{GraphSnapshot, TaskGraph, TaskNode};
pub use planner::{PlanStep, Planner};
pub use router::{ActionSpec, Intent, ModelOutput, RawAction, Router, RoutingDecision};
