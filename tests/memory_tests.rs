use noesis::memory::{MemoryContract, MemoryKind, MemoryScope, MemoryUsageMode, MemoryUsagePolicy};

#[test]
fn test_scope_values_are_stable() {
    assert_eq!(MemoryScope::Global.as_str(), "global");
    assert_eq!(MemoryScope::Workspace.as_str(), "workspace");
    assert_eq!(MemoryScope::Session.as_str(), "session");
    assert_eq!(MemoryScope::Task.as_str(), "task");
    assert_eq!(MemoryScope::ALL.len(), 4);
}

#[test]
fn test_kind_values_are_stable() {
    let values: Vec<&str> = MemoryKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        values,
        vec!["fact", "decision", "plan", "summary", "code_change", "event", "note"]
    );
}

#[test]
fn test_scope_is_ordered_by_generality() {
    assert!(MemoryScope::Global < MemoryScope::Workspace);
    assert!(MemoryScope::Workspace < MemoryScope::Session);
    assert!(MemoryScope::Session < MemoryScope::Task);
}

#[test]
fn test_contract_governance_flags_default_to_false() {
    let contract = MemoryContract::new("note", "note", MemoryKind::Note, MemoryScope::Task);

    assert!(!contract.mutable);
    assert!(!contract.expires);
    assert!(!contract.user_visible);
    assert!(!contract.system_critical);
}

#[test]
fn test_contract_serializes_with_stable_values() {
    let contract = MemoryContract::new("fact", "verified fact", MemoryKind::Fact, MemoryScope::Global)
        .user_visible()
        .with_tags(["verified", "core"]);

    let data = serde_json::to_value(&contract).unwrap();

    assert_eq!(data["kind"], "fact");
    assert_eq!(data["scope"], "global");
    assert_eq!(data["user_visible"], true);
    // Tags are a sorted set.
    assert_eq!(data["tags"], serde_json::json!(["core", "verified"]));
}

#[test]
fn test_policy_denies_unlisted_mode() {
    let policy = MemoryUsagePolicy::new([MemoryUsageMode::Read]);
    let contract = MemoryContract::new("fact", "fact", MemoryKind::Fact, MemoryScope::Global);

    assert!(policy.allows(&contract, MemoryUsageMode::Read, None));
    assert!(!policy.allows(&contract, MemoryUsageMode::Reasoning, None));
}

#[test]
fn test_policy_requires_user_visible_memory() {
    let policy = MemoryUsagePolicy::new([MemoryUsageMode::Reference]).require_user_visibility();

    let hidden = MemoryContract::new("hidden", "hidden memory", MemoryKind::Note, MemoryScope::Session);
    let visible = MemoryContract::new("visible", "visible memory", MemoryKind::Note, MemoryScope::Session)
        .user_visible();

    assert!(!policy.allows(&hidden, MemoryUsageMode::Reference, None));
    assert!(policy.allows(&visible, MemoryUsageMode::Reference, None));
}

#[test]
fn test_policy_forbids_cross_scope_when_enabled() {
    let policy = MemoryUsagePolicy::new([MemoryUsageMode::Context]).forbid_cross_scope();

    let contract =
        MemoryContract::new("workspace_fact", "workspace fact", MemoryKind::Fact, MemoryScope::Workspace);

    assert!(policy.allows(&contract, MemoryUsageMode::Context, Some(MemoryScope::Workspace)));
    assert!(!policy.allows(&contract, MemoryUsageMode::Context, Some(MemoryScope::Global)));
    // Without a target scope there is nothing to cross.
    assert!(policy.allows(&contract, MemoryUsageMode::Context, None));
}

#[test]
fn test_reasoning_mode_is_not_gated_on_system_critical() {
    // The system_critical check belongs to the decision layer, not here.
    let policy = MemoryUsagePolicy::new([MemoryUsageMode::Reasoning]);

    let non_critical = MemoryContract::new("note", "non critical note", MemoryKind::Note, MemoryScope::Session);
    assert!(policy.allows(&non_critical, MemoryUsageMode::Reasoning, None));

    let critical = MemoryContract::new("core", "critical memory", MemoryKind::Fact, MemoryScope::Global)
        .system_critical();
    assert!(policy.allows(&critical, MemoryUsageMode::Reasoning, None));
}
