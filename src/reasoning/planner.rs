use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::router::RawAction;

/// Default category for steps whose source action did not declare one.
const GENERIC_STEP_KIND: &str = "generic";

/// One normalized, orderable unit of work. Plans are ordered sequences of
/// steps; order equals input order and ids are 1-based positional
/// (`step-1`, `step-2`, ...), so identical input always yields identical
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlanStep {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    pub description: String,

    #[serde(rename = "type", default = "default_step_kind")]
    pub kind: String,

    #[serde(default)]
    pub agent_hint: Option<String>,

    #[serde(default)]
    pub payload: Map<String, Value>,
}

fn default_step_kind() -> String {
    GENERIC_STEP_KIND.to_string()
}

impl PlanStep {
    fn new(index: usize, description: impl Into<String>) -> Self {
        Self {
            id: format!("step-{index}"),
            title: None,
            description: description.into(),
            kind: GENERIC_STEP_KIND.to_string(),
            agent_hint: None,
            payload: Map::new(),
        }
    }
}

/// Normalizes heterogeneous raw actions into an ordered plan.
///
/// Pure function over borrowed input: never mutates the caller's actions,
/// never fails, and produces the same ids and order on every call.
pub struct Planner;

impl Planner {
    /// Builds a plan from a goal and optional raw actions.
    ///
    /// With no actions, returns a single fallback step carrying the goal in
    /// its payload, so downstream consumers can always assume a non-empty
    /// plan. Malformed entries are coerced to best-effort steps.
    pub fn build_plan(goal: &str, raw_actions: Option<&[RawAction]>) -> Vec<PlanStep> {
        let actions = match raw_actions {
            Some(actions) if !actions.is_empty() => actions,
            _ => {
                debug!(%goal, "no actions provided, emitting fallback plan");
                let mut step = PlanStep::new(1, format!("Fallback plan for goal: {goal}"));
                step.payload
                    .insert("goal".to_string(), Value::String(goal.to_string()));
                return vec![step];
            }
        };

        let plan: Vec<PlanStep> = actions
            .iter()
            .enumerate()
            .map(|(i, action)| Self::normalize(i + 1, action))
            .collect();

        debug!(%goal, steps = plan.len(), "plan built");
        plan
    }

    fn normalize(index: usize, action: &RawAction) -> PlanStep {
        match action {
            RawAction::Text(text) => PlanStep::new(index, text.clone()),
            RawAction::Structured(spec) => {
                let description = spec
                    .description
                    .clone()
                    .or_else(|| spec.title.clone())
                    .unwrap_or_else(|| format!("Unspecified step {index}"));
                let mut step = PlanStep::new(index, description);
                step.title = spec.title.clone();
                if let Some(kind) = &spec.kind {
                    step.kind = kind.clone();
                }
                step.agent_hint = spec.agent_hint.clone();
                step.payload = spec.payload.clone();
                step
            }
            RawAction::Other(value) => {
                // Unrecognized shape: keep it recoverable in the payload
                // instead of failing plan construction.
                let mut step = PlanStep::new(index, format!("Unspecified step {index}"));
                step.payload.insert("raw".to_string(), value.clone());
                step
            }
        }
    }
}
