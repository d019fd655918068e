use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Classified purpose of a request. Closed set; extending it is a
/// versioned change, so every match on it stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Plan,
    Analyze,
    Validate,
    Respond,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan => write!(f, "plan"),
            Self::Analyze => write!(f, "analyze"),
            Self::Validate => write!(f, "validate"),
            Self::Respond => write!(f, "respond"),
        }
    }
}

/// One raw action from model output: either a bare string, a structured
/// record, or anything else the model produced. Decoding is total; shapes
/// that fit neither known form land in `Other` and are coerced later.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawAction {
    Text(String),
    Structured(ActionSpec),
    Other(Value),
}

/// Structured action record. All fields optional; a missing description
/// degrades rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ActionSpec {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub agent_hint: Option<String>,

    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Raw model output as seen by the router. Every key is optional; absent
/// keys simply mean the corresponding heuristic does not match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ModelOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RawAction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelOutput {
    pub fn with_actions(mut self, actions: Vec<RawAction>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_issues(mut self, issues: Vec<Value>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.analysis = Some(analysis.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }
}

/// The router's classification output, before governance is applied.
/// Created once per routing call and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub intent: Intent,
    pub reason: String,

    #[serde(default)]
    pub payload: Map<String, Value>,

    #[serde(default)]
    pub suggested_roles: Vec<String>,

    #[serde(default)]
    pub confidence: f64,
}

impl RoutingDecision {
    pub fn new(intent: Intent, reason: impl Into<String>) -> Self {
        Self {
            intent,
            reason: reason.into(),
            payload: Map::new(),
            suggested_roles: Vec::new(),
            confidence: 0.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggested_roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

/// Explicit mode value that forces planning regardless of heuristics.
const PLAN_MODE: &str = "plan";

/// Confidence assigned when the caller forced the intent explicitly.
const EXPLICIT_MODE_CONFIDENCE: f64 = 1.0;
/// Structured actions are a strong planning signal.
const ACTIONS_CONFIDENCE: f64 = 0.75;
/// Validation signals are treated as high-certainty.
const ISSUES_CONFIDENCE: f64 = 0.85;
/// Analysis-shaped output is a moderate signal.
const ANALYSIS_CONFIDENCE: f64 = 0.7;
/// Fallback response carries low certainty.
const RESPOND_CONFIDENCE: f64 = 0.4;

/// Classifies a (query, model output, optional explicit mode) triple into a
/// [`RoutingDecision`]. Pure heuristic function: no external state, total
/// over all inputs.
pub struct Router;

impl Router {
    /// Decision precedence, first match wins:
    /// 1. explicit `mode == "plan"` override
    /// 2. non-empty structured actions -> Plan
    /// 3. non-empty issues -> Validate
    /// 4. non-empty analysis text -> Analyze
    /// 5. default -> Respond (unknown modes fall through here, never fail)
    pub fn route(user_query: &str, llm_output: &ModelOutput, mode: Option<&str>) -> RoutingDecision {
        if mode == Some(PLAN_MODE) {
            debug!(mode = PLAN_MODE, "explicit mode override");
            let mut payload = Map::new();
            payload.insert("goal".to_string(), Value::String(user_query.to_string()));
            return RoutingDecision::new(Intent::Plan, "explicit plan mode requested")
                .with_confidence(EXPLICIT_MODE_CONFIDENCE)
                .with_roles(["planner"])
                .with_payload(payload);
        }

        if !llm_output.actions.is_empty() {
            debug!(actions = llm_output.actions.len(), "structured actions detected");
            let mut payload = Map::new();
            payload.insert("goal".to_string(), Value::String(user_query.to_string()));
            payload.insert(
                "actions".to_string(),
                serde_json::to_value(&llm_output.actions).unwrap_or(Value::Null),
            );
            return RoutingDecision::new(Intent::Plan, "structured actions detected in model output")
                .with_confidence(ACTIONS_CONFIDENCE)
                .with_roles(["planner"])
                .with_payload(payload);
        }

        if !llm_output.issues.is_empty() {
            debug!(issues = llm_output.issues.len(), "issues detected");
            let mut payload = Map::new();
            payload.insert("issues".to_string(), Value::Array(llm_output.issues.clone()));
            return RoutingDecision::new(Intent::Validate, "issues detected in model output")
                .with_confidence(ISSUES_CONFIDENCE)
                .with_roles(["validator"])
                .with_payload(payload);
        }

        if llm_output.analysis.as_deref().is_some_and(|a| !a.trim().is_empty()) {
            debug!("analysis-shaped output detected");
            let mut payload = Map::new();
            payload.insert(
                "content".to_string(),
                serde_json::to_value(llm_output).unwrap_or(Value::Null),
            );
            return RoutingDecision::new(Intent::Analyze, "analysis-shaped output detected")
                .with_confidence(ANALYSIS_CONFIDENCE)
                .with_roles(["analyzer"])
                .with_payload(payload);
        }

        debug!(?mode, "no heuristic matched, responding directly");
        let mut payload = Map::new();
        if let Some(answer) = &llm_output.answer {
            payload.insert("answer".to_string(), Value::String(answer.clone()));
        }
        RoutingDecision::new(Intent::Respond, "no routing heuristic matched")
            .with_confidence(RESPOND_CONFIDENCE)
            .with_payload(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_output_decodes_mixed_action_shapes() {
        let output: ModelOutput = serde_json::from_str(
            r#"{"actions": ["scan files", {"title": "Refactor", "description": "Refactor module"}, 42]}"#,
        )
        .unwrap();

        assert_eq!(output.actions.len(), 3);
        assert!(matches!(output.actions[0], RawAction::Text(_)));
        assert!(matches!(output.actions[1], RawAction::Structured(_)));
        assert!(matches!(output.actions[2], RawAction::Other(_)));
    }

    #[test]
    fn unknown_keys_are_preserved_in_extra() {
        let output: ModelOutput =
            serde_json::from_str(r#"{"answer": "hi", "trace_id": "t-1"}"#).unwrap();

        assert_eq!(output.answer.as_deref(), Some("hi"));
        assert_eq!(output.extra["trace_id"], "t-1");
    }

    #[test]
    fn intent_serializes_as_snake_case() {
        assert_eq!(serde_json::to_value(Intent::Plan).unwrap(), "plan");
        assert_eq!(Intent::Validate.to_string(), "validate");
    }
}
