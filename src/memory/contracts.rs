use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Visibility scope of a memory, ordered by generality:
/// Global > Workspace > Session > Task. The ordering is semantic, not
/// enforced in code, but it is stable and documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryScope {
    Global,
    Workspace,
    Session,
    Task,
}

impl MemoryScope {
    pub const ALL: [MemoryScope; 4] = [
        MemoryScope::Global,
        MemoryScope::Workspace,
        MemoryScope::Session,
        MemoryScope::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Workspace => "workspace",
            Self::Session => "session",
            Self::Task => "task",
        }
    }
}

impl std::fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic kind of a memory. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryKind {
    Fact,
    Decision,
    Plan,
    Summary,
    CodeChange,
    Event,
    Note,
}

impl MemoryKind {
    pub const ALL: [MemoryKind; 7] = [
        MemoryKind::Fact,
        MemoryKind::Decision,
        MemoryKind::Plan,
        MemoryKind::Summary,
        MemoryKind::CodeChange,
        MemoryKind::Event,
        MemoryKind::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fact => "fact",
            Self::Decision => "decision",
            Self::Plan => "plan",
            Self::Summary => "summary",
            Self::CodeChange => "code_change",
            Self::Event => "event",
            Self::Note => "note",
        }
    }
}

impl std::fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative contract describing one class of memory and how it may be
/// governed. Immutable once defined; governance flags default to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryContract {
    pub name: String,
    pub description: String,
    pub kind: MemoryKind,
    pub scope: MemoryScope,

    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub expires: bool,
    #[serde(default)]
    pub user_visible: bool,
    #[serde(default)]
    pub system_critical: bool,

    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl MemoryContract {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: MemoryKind,
        scope: MemoryScope,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            scope,
            mutable: false,
            expires: false,
            user_visible: false,
            system_critical: false,
            tags: BTreeSet::new(),
        }
    }

    pub fn user_visible(mut self) -> Self {
        self.user_visible = true;
        self
    }

    pub fn system_critical(mut self) -> Self {
        self.system_critical = true;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
