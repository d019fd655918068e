//! Cognitive mode, role, and scoring registries.
//!
//! Closed sets of declarative records, all `const`. The reasoning core
//! reads them; nothing ever extends them at runtime.

mod modes;
mod roles;
mod scoring;

pub use modes::{
    mode_by_name, CognitiveMode, DECIDE_MODE, DIAGNOSE_MODE, EXPLAIN_MODE, EXPLORE_MODE,
    GENERATE_MODE, MODE_REGISTRY, PLAN_MODE, SUMMARIZE_MODE,
};
pub use roles::{
    role_by_name, CognitiveRole, ANALYZER_ROLE, EXECUTOR_ROLE, OBSERVER_ROLE, PLANNER_ROLE,
    ROLE_REGISTRY, SYSTEM_ROLE, VALIDATOR_ROLE,
};
pub use scoring::{
    profile_by_name, CognitiveScore, ScoringProfile, ScoringWeights, DEFAULT_PROFILE,
    DIAGNOSTIC_PROFILE, GENERATION_PROFILE, PLANNING_PROFILE, SCORING_PROFILES,
};
