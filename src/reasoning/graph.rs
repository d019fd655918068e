use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NoesisError, Result};

/// A single unit of work inside a [`TaskGraph`].
///
/// Nodes are identity-bearing: once added to a graph, the graph owns them
/// and the id must stay unique within that graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    pub kind: String,
    pub description: String,

    #[serde(default)]
    pub required_capabilities: BTreeSet<String>,

    #[serde(default)]
    pub suggested_agent: Option<String>,

    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl TaskNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            description: description.into(),
            required_capabilities: BTreeSet::new(),
            suggested_agent: None,
            metadata: Map::new(),
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_suggested_agent(mut self, agent: impl Into<String>) -> Self {
        self.suggested_agent = Some(agent.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Serializable snapshot of a [`TaskGraph`], computed fresh on every call.
///
/// Field names are a compatibility surface; downstream tooling keys on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: BTreeMap<String, TaskNode>,
    pub edges: Vec<(String, String)>,
    pub roots: Vec<String>,
    pub leaves: Vec<String>,
    pub valid_dag: bool,
}

/// Mutable directed graph of [`TaskNode`]s with depends-on edges.
///
/// Edge `(from, to)` means `to` depends on `from`: `from` must complete
/// first. Cycle validity is an on-demand check, not an insertion-time
/// constraint, so callers can build graphs incrementally (e.g. while a
/// model streams steps) and validate once complete.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: HashMap<String, TaskNode>,
    /// Node ids in insertion order.
    order: Vec<String>,
    /// Depends-on edges in insertion order.
    edges: Vec<(String, String)>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node by id. Re-inserting an existing id fails, even for
    /// an identical node; graph state is unchanged on failure.
    pub fn add_node(&mut self, node: TaskNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(NoesisError::DuplicateNode(node.id));
        }
        debug!(id = %node.id, kind = %node.kind, "adding task node");
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn get_node(&self, id: &str) -> Result<&TaskNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| NoesisError::NodeNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records that `to` depends on `from` (`from` must run first).
    ///
    /// Does not reject cycles or check that either id exists; validity is
    /// checked separately via [`TaskGraph::is_valid_dag`].
    pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let (from, to) = (from.into(), to.into());
        debug!(%from, %to, "adding dependency edge");
        self.edges.push((from, to));
    }

    /// Ids that directly precede `id` (ids it depends on), in edge-insertion order.
    pub fn dependencies_of(&self, id: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter(|(_, to)| to == id)
            .map(|(from, _)| from.clone())
            .collect()
    }

    /// Ids that directly depend on `id`, in edge-insertion order.
    pub fn dependents_of(&self, id: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter(|(from, _)| from == id)
            .map(|(_, to)| to.clone())
            .collect()
    }

    /// Node ids with no dependencies (never the target of an edge).
    pub fn roots(&self) -> Vec<String> {
        let targets: HashSet<&str> = self.edges.iter().map(|(_, to)| to.as_str()).collect();
        self.order
            .iter()
            .filter(|id| !targets.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// Node ids nothing depends on further (never the source of an edge).
    pub fn leaves(&self) -> Vec<String> {
        let sources: HashSet<&str> = self.edges.iter().map(|(from, _)| from.as_str()).collect();
        self.order
            .iter()
            .filter(|id| !sources.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// True iff the dependency edges contain no directed cycle.
    pub fn is_valid_dag(&self) -> bool {
        self.find_cycle().is_none()
    }

    /// Finds one directed cycle, if any, and returns the path that closed it.
    ///
    /// Three-color DFS: a node reached while still on the recursion stack
    /// signals a cycle. Every node is visited, including ones unreachable
    /// from any root, so cycles in disconnected components are caught.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for (from, to) in &self.edges {
            adjacency.entry(from.as_str()).or_default().push(to.as_str());
        }

        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut path = Vec::new();

        for id in &self.order {
            if dfs_cycle(id, &adjacency, &mut visited, &mut rec_stack, &mut path) {
                return Some(path);
            }
        }

        None
    }

    /// Full serializable snapshot of the current graph state.
    ///
    /// Computed fresh each call; never cached.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes
                .iter()
                .map(|(id, node)| (id.clone(), node.clone()))
                .collect(),
            edges: self.edges.clone(),
            roots: self.roots(),
            leaves: self.leaves(),
            valid_dag: self.is_valid_dag(),
        }
    }
}

fn dfs_cycle(
    node: &str,
    graph: &HashMap<&str, Vec<&str>>,
    visited: &mut HashSet<String>,
    rec_stack: &mut HashSet<String>,
    path: &mut Vec<String>,
) -> bool {
    let node_str = node.to_string();

    if rec_stack.contains(&node_str) {
        path.push(node_str);
        return true;
    }

    if visited.contains(&node_str) {
        return false;
    }

    visited.insert(node_str.clone());
    rec_stack.insert(node_str.clone());
    path.push(node_str.clone());

    if let Some(next) = graph.get(node) {
        for dep in next {
            if dfs_cycle(dep, graph, visited, rec_stack, path) {
                return true;
            }
        }
    }

    rec_stack.remove(&node_str);
    path.pop();
    false
}
