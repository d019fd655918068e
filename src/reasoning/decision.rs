use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::router::{Intent, RoutingDecision};

/// Ambient state at decision time, constructed fresh per call by the
/// caller and never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionContext {
    #[serde(default)]
    pub user_intent: String,

    #[serde(default = "default_lifecycle_state")]
    pub lifecycle_state: String,
}

fn default_lifecycle_state() -> String {
    "idle".to_string()
}

impl Default for DecisionContext {
    fn default() -> Self {
        Self {
            user_intent: String::new(),
            lifecycle_state: default_lifecycle_state(),
        }
    }
}

impl DecisionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_intent(mut self, user_intent: impl Into<String>) -> Self {
        self.user_intent = user_intent.into();
        self
    }

    pub fn with_lifecycle_state(mut self, state: impl Into<String>) -> Self {
        self.lifecycle_state = state.into();
        self
    }
}

/// Final proceed/block verdict produced by a [`DecisionPolicy`].
///
/// When blocked, `meta["action"]` names the remediation and `reason`
/// lexically hints at the cause; callers pattern-match on both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub intent: Intent,
    pub proceed: bool,
    pub reason: String,

    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Governance gate applied between routing and planning/execution.
///
/// The trait has no default method body: there is no bare "abstract
/// policy" value to misuse, only concrete implementations.
pub trait DecisionPolicy {
    fn decide(&self, routing: &RoutingDecision, context: &DecisionContext) -> Decision;
}

/// Tunables for [`DefaultDecisionPolicy`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Routing below this confidence is blocked for clarification (0.0-1.0).
    pub low_confidence_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            low_confidence_threshold: 0.4,
        }
    }
}

/// Default guardrails, applied in order; the first matching gate wins, so
/// a low-confidence plan request during execution blocks for the
/// confidence reason, not the lifecycle reason.
#[derive(Debug, Clone, Default)]
pub struct DefaultDecisionPolicy {
    config: PolicyConfig,
}

impl DefaultDecisionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl DecisionPolicy for DefaultDecisionPolicy {
    fn decide(&self, routing: &RoutingDecision, context: &DecisionContext) -> Decision {
        if routing.confidence < self.config.low_confidence_threshold {
            warn!(
                intent = %routing.intent,
                confidence = routing.confidence,
                threshold = self.config.low_confidence_threshold,
                "blocking low-confidence routing"
            );
            let mut meta = Map::new();
            meta.insert(
                "action".to_string(),
                Value::String("ask_clarification".to_string()),
            );
            return Decision {
                intent: routing.intent,
                proceed: false,
                reason: format!(
                    "Routing confidence {:.2} is below the minimum {:.2}",
                    routing.confidence, self.config.low_confidence_threshold
                ),
                confidence: routing.confidence,
                meta,
            };
        }

        if routing.intent == Intent::Plan && context.lifecycle_state == "executing" {
            warn!(lifecycle_state = %context.lifecycle_state, "blocking plan during execution");
            let mut meta = Map::new();
            meta.insert("action".to_string(), Value::String("wait".to_string()));
            return Decision {
                intent: routing.intent,
                proceed: false,
                reason: "Planning is not allowed while execution is in progress".to_string(),
                confidence: routing.confidence,
                meta,
            };
        }

        debug!(intent = %routing.intent, confidence = routing.confidence, "routing accepted");
        let mut meta = Map::new();
        meta.insert(
            "suggested_roles".to_string(),
            Value::Array(
                routing
                    .suggested_roles
                    .iter()
                    .map(|r| Value::String(r.clone()))
                    .collect(),
            ),
        );
        meta.insert(
            "payload".to_string(),
            Value::Object(routing.payload.clone()),
        );
        Decision {
            intent: routing.intent,
            proceed: true,
            reason: "Routing accepted".to_string(),
            confidence: routing.confidence,
            meta,
        }
    }
}
