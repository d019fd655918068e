use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::contracts::{MemoryContract, MemoryScope};

/// How a memory is being used. Closed cognitive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryUsageMode {
    Read,
    Reference,
    Reasoning,
    Context,
    Audit,
}

impl MemoryUsageMode {
    pub const ALL: [MemoryUsageMode; 5] = [
        MemoryUsageMode::Read,
        MemoryUsageMode::Reference,
        MemoryUsageMode::Reasoning,
        MemoryUsageMode::Context,
        MemoryUsageMode::Audit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Reference => "reference",
            Self::Reasoning => "reasoning",
            Self::Context => "context",
            Self::Audit => "audit",
        }
    }
}

impl std::fmt::Display for MemoryUsageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate deciding whether a memory contract may be used in a given mode.
///
/// Total function: `allows` never fails, it only answers yes or no.
/// `system_critical` is deliberately not checked for `Reasoning` mode;
/// that constraint belongs to the decision layer above.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryUsagePolicy {
    /// Modes not listed here are denied.
    #[serde(default)]
    pub allowed_modes: BTreeSet<MemoryUsageMode>,

    /// When set, hidden memories (not `user_visible`) are denied.
    #[serde(default)]
    pub require_user_visibility: bool,

    /// When set, a memory may only be used inside its own scope.
    #[serde(default)]
    pub forbid_cross_scope: bool,
}

impl MemoryUsagePolicy {
    pub fn new<I>(allowed_modes: I) -> Self
    where
        I: IntoIterator<Item = MemoryUsageMode>,
    {
        Self {
            allowed_modes: allowed_modes.into_iter().collect(),
            require_user_visibility: false,
            forbid_cross_scope: false,
        }
    }

    pub fn require_user_visibility(mut self) -> Self {
        self.require_user_visibility = true;
        self
    }

    pub fn forbid_cross_scope(mut self) -> Self {
        self.forbid_cross_scope = true;
        self
    }

    pub fn allows(
        &self,
        contract: &MemoryContract,
        mode: MemoryUsageMode,
        target_scope: Option<MemoryScope>,
    ) -> bool {
        if !self.allowed_modes.contains(&mode) {
            debug!(contract = %contract.name, %mode, "mode not allowed by policy");
            return false;
        }

        if self.require_user_visibility && !contract.user_visible {
            debug!(contract = %contract.name, "hidden memory denied");
            return false;
        }

        if self.forbid_cross_scope {
            if let Some(target) = target_scope {
                if target != contract.scope {
                    debug!(
                        contract = %contract.name,
                        scope = %contract.scope,
                        target = %target,
                        "cross-scope use denied"
                    );
                    return false;
                }
            }
        }

        true
    }
}
