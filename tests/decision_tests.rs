use noesis::reasoning::{
    DecisionContext, DecisionPolicy, DefaultDecisionPolicy, Intent, PolicyConfig, RoutingDecision,
};
use serde_json::{json, Map};

#[test]
fn test_low_confidence_is_blocked_for_clarification() {
    let policy = DefaultDecisionPolicy::new();
    let routing = RoutingDecision::new(Intent::Respond, "uncertain").with_confidence(0.1);

    let decision = policy.decide(&routing, &DecisionContext::new());

    assert!(!decision.proceed);
    assert_eq!(decision.intent, Intent::Respond);
    assert!(decision.reason.to_lowercase().contains("confidence"));
    assert_eq!(decision.meta["action"], "ask_clarification");
}

#[test]
fn test_plan_during_execution_is_blocked() {
    let policy = DefaultDecisionPolicy::new();
    let routing = RoutingDecision::new(Intent::Plan, "need a plan").with_confidence(0.9);
    let context = DecisionContext::new().with_lifecycle_state("executing");

    let decision = policy.decide(&routing, &context);

    assert!(!decision.proceed);
    assert_eq!(decision.intent, Intent::Plan);
    assert!(decision.reason.to_lowercase().contains("execution"));
    assert_eq!(decision.meta["action"], "wait");
}

#[test]
fn test_confidence_gate_wins_over_lifecycle_gate() {
    let policy = DefaultDecisionPolicy::new();
    let routing = RoutingDecision::new(Intent::Plan, "weak plan signal").with_confidence(0.1);
    let context = DecisionContext::new().with_lifecycle_state("executing");

    let decision = policy.decide(&routing, &context);

    assert!(!decision.proceed);
    assert!(decision.reason.to_lowercase().contains("confidence"));
    assert_eq!(decision.meta["action"], "ask_clarification");
}

#[test]
fn test_valid_routing_is_accepted_and_mirrored() {
    let policy = DefaultDecisionPolicy::new();

    let mut payload = Map::new();
    payload.insert("data".to_string(), json!("x"));
    let routing = RoutingDecision::new(Intent::Analyze, "analysis requested")
        .with_confidence(0.8)
        .with_payload(payload)
        .with_roles(["analyzer"]);
    let context = DecisionContext::new().with_lifecycle_state("idle");

    let decision = policy.decide(&routing, &context);

    assert!(decision.proceed);
    assert_eq!(decision.intent, Intent::Analyze);
    assert_eq!(decision.confidence, routing.confidence);
    assert_eq!(decision.meta["suggested_roles"], json!(["analyzer"]));
    assert_eq!(decision.meta["payload"], json!({"data": "x"}));
    assert!(!decision.reason.is_empty());
}

#[test]
fn test_plan_is_allowed_while_idle() {
    let policy = DefaultDecisionPolicy::new();
    let routing = RoutingDecision::new(Intent::Plan, "plan requested").with_confidence(0.75);

    let decision = policy.decide(&routing, &DecisionContext::new());
    assert!(decision.proceed);
}

#[test]
fn test_threshold_is_configurable() {
    let strict = DefaultDecisionPolicy::with_config(PolicyConfig {
        low_confidence_threshold: 0.9,
    });
    let routing = RoutingDecision::new(Intent::Analyze, "ok").with_confidence(0.8);

    let decision = strict.decide(&routing, &DecisionContext::new());

    assert!(!decision.proceed);
    assert_eq!(decision.meta["action"], "ask_clarification");
}

#[test]
fn test_decision_serializes_with_stable_fields() {
    let policy = DefaultDecisionPolicy::new();
    let routing = RoutingDecision::new(Intent::Respond, "ok").with_confidence(0.5);

    let decision = policy.decide(&routing, &DecisionContext::new());
    let value = serde_json::to_value(&decision).unwrap();

    for key in ["intent", "proceed", "reason", "confidence", "meta"] {
        assert!(value.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(value["intent"], "respond");
}
