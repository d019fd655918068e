use noesis::reasoning::{Planner, RawAction};
use serde_json::json;

#[test]
fn test_fallback_plan_when_no_actions() {
    let goal = "Analyze the project structure";

    let plan = Planner::build_plan(goal, None);

    assert_eq!(plan.len(), 1);
    let step = &plan[0];
    assert_eq!(step.id, "step-1");
    assert_eq!(step.payload["goal"], goal);
    assert!(step.description.to_lowercase().contains("fallback"));
}

#[test]
fn test_empty_action_list_also_falls_back() {
    let plan = Planner::build_plan("X", Some(&[]));

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].payload["goal"], "X");
}

#[test]
fn test_structured_actions_are_normalized_verbatim() {
    let actions: Vec<RawAction> = serde_json::from_value(json!([
        {
            "title": "Scan files",
            "description": "Scan all source files",
            "type": "analyze",
            "agent_hint": "scanner",
            "payload": {"path": "src/"}
        }
    ]))
    .unwrap();

    let plan = Planner::build_plan("Scan project", Some(&actions));

    assert_eq!(plan.len(), 1);
    let step = &plan[0];
    assert_eq!(step.title.as_deref(), Some("Scan files"));
    assert_eq!(step.description, "Scan all source files");
    assert_eq!(step.kind, "analyze");
    assert_eq!(step.agent_hint.as_deref(), Some("scanner"));
    assert_eq!(step.payload["path"], "src/");
}

#[test]
fn test_string_actions_become_steps() {
    let actions = vec![
        RawAction::Text("Analyze codebase".to_string()),
        RawAction::Text("Generate report".to_string()),
    ];

    let plan = Planner::build_plan("Analyze project", Some(&actions));

    assert_eq!(plan.len(), 2);
    for (idx, step) in plan.iter().enumerate() {
        assert_eq!(step.id, format!("step-{}", idx + 1));
        assert!(!step.description.is_empty());
        assert_eq!(step.kind, "generic");
    }
    assert_eq!(plan[0].description, "Analyze codebase");
}

#[test]
fn test_ids_are_deterministic_across_calls() {
    let actions: Vec<RawAction> = serde_json::from_value(json!([
        {"description": "Step A"},
        {"description": "Step B"}
    ]))
    .unwrap();

    let first = Planner::build_plan("Test", Some(&actions));
    let second = Planner::build_plan("Test", Some(&actions));

    let ids1: Vec<&str> = first.iter().map(|s| s.id.as_str()).collect();
    let ids2: Vec<&str> = second.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids1, ids2);
    assert_eq!(first, second);
}

#[test]
fn test_input_actions_are_not_mutated() {
    let actions: Vec<RawAction> = serde_json::from_value(json!([
        {"title": "Scan", "description": "Scan files"}
    ]))
    .unwrap();
    let before = serde_json::to_value(&actions).unwrap();

    let _ = Planner::build_plan("Scan project", Some(&actions));

    let after = serde_json::to_value(&actions).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_action_with_no_title_or_description_does_not_fail() {
    let actions: Vec<RawAction> = serde_json::from_value(json!([{}, "then this"])).unwrap();

    let plan = Planner::build_plan("goal", Some(&actions));

    assert_eq!(plan.len(), 2);
    assert!(!plan[0].description.is_empty());
    assert_eq!(plan[1].description, "then this");
}

#[test]
fn test_plan_step_serializes_type_key() {
    let plan = Planner::build_plan("goal", None);
    let value = serde_json::to_value(&plan[0]).unwrap();

    assert_eq!(value["type"], "generic");
    assert_eq!(value["id"], "step-1");
}
