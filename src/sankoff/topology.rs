use super::phylogeny::Phylogeny;
use super::table::StateTable;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// the duplication-speciation topology: two structural copies of the
/// phylogeny hung under a fresh root, the left copy standing for the
/// original region and the right for its putative duplicate. built
/// once per run and reused across every position and length.
///
/// the graph doubles as an arena; NodeIndex handles address leaves
/// without any traversal, and `schedule` lists every internal node in
/// post-order with its child pair, so an update is one flat pass.
pub struct Topology {
    pub(super) graph: DiGraph<StateTable, ()>,
    pub(super) root: NodeIndex,
    pub(super) split: (NodeIndex, NodeIndex),
    pub(super) leaves: Vec<NodeIndex>,
    pub(super) schedule: Vec<(NodeIndex, (NodeIndex, NodeIndex))>,
}

impl Topology {
    pub fn duplicate(shape: &Phylogeny, states: usize) -> Self {
        let k = shape.leaves().len();
        assert!(shape.labels_sequences(k), "leaf labels must be 0..k");
        let mut graph = DiGraph::with_capacity(4 * k, 4 * k);
        let mut schedule = Vec::with_capacity(2 * k);
        let mut leaves = vec![NodeIndex::end(); 2 * k];
        let l = Self::copy(shape, states, &mut graph, &mut schedule, &mut leaves, 0);
        let r = Self::copy(shape, states, &mut graph, &mut schedule, &mut leaves, k);
        let root = graph.add_node(StateTable::new(states));
        graph.add_edge(root, l, ());
        graph.add_edge(root, r, ());
        schedule.push((root, (l, r)));
        assert!(leaves.iter().all(|&leaf| leaf != NodeIndex::end()));
        Self {
            graph,
            root,
            split: (l, r),
            leaves,
            schedule,
        }
    }

    /// one structural copy of the phylogeny. the leaf for sequence i
    /// lands at slot offset+i, so a column transverses the left copy
    /// first and the right copy second, sequence order within each.
    fn copy(
        shape: &Phylogeny,
        states: usize,
        graph: &mut DiGraph<StateTable, ()>,
        schedule: &mut Vec<(NodeIndex, (NodeIndex, NodeIndex))>,
        leaves: &mut [NodeIndex],
        offset: usize,
    ) -> NodeIndex {
        match shape {
            Phylogeny::Leaf(i) => {
                let leaf = graph.add_node(StateTable::new(states));
                leaves[offset + i] = leaf;
                leaf
            }
            Phylogeny::Split(a, b) => {
                let l = Self::copy(a, states, graph, schedule, leaves, offset);
                let r = Self::copy(b, states, graph, schedule, leaves, offset);
                let node = graph.add_node(StateTable::new(states));
                graph.add_edge(node, l, ());
                graph.add_edge(node, r, ());
                schedule.push((node, (l, r)));
                node
            }
        }
    }

    /// number of leaves, i.e. twice the number of sequences
    pub fn width(&self) -> usize {
        self.leaves.len()
    }
    pub fn states(&self) -> usize {
        self.graph[self.root].len()
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn leaves(&self) -> &[NodeIndex] {
        &self.leaves
    }
}
