use std::collections::HashMap;

/// Index of a node inside its [`DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One source file and the files it must be compiled after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    dependencies: Vec<NodeId>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisites in the order they were first added
    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    fn add_dependency(&mut self, id: NodeId) -> bool {
        if self.dependencies.contains(&id) {
            return false;
        }
        self.dependencies.push(id);
        true
    }
}

/// File-level dependency graph keyed by file path.
///
/// Nodes keep insertion order, which is the order the sorter seeds its
/// frontier with.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing one with the same name
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(name));
        id
    }

    /// Record that `dependent` needs `prerequisite` first. Self-edges and
    /// repeated edges are ignored; returns whether an edge was added.
    pub fn add_dependency(&mut self, dependent: NodeId, prerequisite: NodeId) -> bool {
        if dependent == prerequisite {
            return false;
        }
        self.nodes[dependent.0].add_dependency(prerequisite)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.dependencies.len()).sum()
    }

    /// All edges as (dependent, prerequisite) names
    pub fn edges(&self) -> Vec<(String, String)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.dependencies
                    .iter()
                    .map(move |&dep| (node.name.clone(), self.node(dep).name.clone()))
            })
            .collect()
    }

    /// Every node with the names of its dependencies
    pub fn adjacency(&self) -> Vec<(String, Vec<String>)> {
        self.nodes
            .iter()
            .map(|node| (node.name.clone(), self.names(&node.dependencies)))
            .collect()
    }

    /// For each node, the nodes that depend on it
    pub fn dependents(&self) -> Vec<Vec<NodeId>> {
        let mut dependents = vec![Vec::new(); self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            for dep in &node.dependencies {
                dependents[dep.0].push(NodeId(i));
            }
        }
        dependents
    }

    pub fn names(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| self.node(id).name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("a.f90");
        let again = graph.add_node("a.f90");
        assert_eq!(a, again);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.find("a.f90"), Some(a));
        assert_eq!(graph.find("b.f90"), None);
    }

    #[test]
    fn test_dependencies_are_unique_and_ordered() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");

        assert!(graph.add_dependency(a, c));
        assert!(graph.add_dependency(a, b));
        assert!(!graph.add_dependency(a, c));
        assert!(!graph.add_dependency(a, a));

        assert_eq!(graph.node(a).dependencies(), &[c, b]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_dependents_and_edges() {
        let mut graph = DependencyGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_dependency(a, b);
        graph.add_dependency(c, b);

        let dependents = graph.dependents();
        assert_eq!(dependents[b.index()], vec![a, c]);
        assert!(dependents[a.index()].is_empty());

        assert_eq!(
            graph.edges(),
            vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "b".to_string())
            ]
        );
        assert_eq!(graph.adjacency()[0], ("a".to_string(), vec!["b".to_string()]));
    }
}
