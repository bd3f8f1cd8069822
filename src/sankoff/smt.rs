use super::table::StateTable;
use super::topology::Topology;
use crate::dna::mutation::MutationCost;
use crate::Cost;
use crate::Count;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// the state-mutation tree: the duplication topology with a state
/// table at every node, updated bottom-up from fixed leaves the way
/// Sankoff's small-phylogeny recurrence prescribes. one instance is
/// built per run and re-fixed for every column it scores.
pub struct Smt {
    graph: DiGraph<StateTable, ()>,
    root: NodeIndex,
    split: (NodeIndex, NodeIndex),
    leaves: Vec<NodeIndex>,
    schedule: Vec<(NodeIndex, (NodeIndex, NodeIndex))>,
    mutation: MutationCost,
    states: usize,
    // scratch for the two child aggregations of the node being
    // updated, pre-sized so the inner loop never allocates
    qcost: Vec<Cost>,
    qcount: Vec<Count>,
}

impl Smt {
    pub fn new(topology: Topology, mutation: MutationCost) -> Self {
        let states = topology.states();
        assert!(states == mutation.states(), "alphabet and cost disagree");
        let Topology {
            graph,
            root,
            split,
            leaves,
            schedule,
        } = topology;
        Self {
            graph,
            root,
            split,
            leaves,
            schedule,
            mutation,
            states,
            qcost: vec![Cost::INFINITY; 2 * states],
            qcount: vec![0; 2 * states],
        }
    }

    /// number of leaves, i.e. the width of a column
    pub fn width(&self) -> usize {
        self.leaves.len()
    }
    pub fn states(&self) -> usize {
        self.states
    }

    /// pin one leaf to a set of admissible states. ambiguity codes
    /// arrive here already expanded by the caller.
    pub fn fix(&mut self, leaf: usize, set: &[u8]) {
        self.graph[self.leaves[leaf]].fix(set);
    }

    /// pin every leaf to its single observed state, left copy first
    pub fn fix_column(&mut self, column: &[u8]) {
        assert!(column.len() == self.leaves.len(), "column width mismatch");
        for (i, &state) in column.iter().enumerate() {
            let leaf = self.leaves[i];
            self.graph[leaf].fix(&[state]);
        }
    }

    /// the post-order Sankoff pass. for every internal node and state
    /// s, cost is the sum over children of the cheapest (child state +
    /// edge) combination, and count multiplies the ways each child
    /// attains its minimum. leaves are untouched, so the update is
    /// idempotent between fixes.
    pub fn update(&mut self) {
        let states = self.states;
        for &(parent, (a, b)) in self.schedule.iter() {
            for (slot, child) in [a, b].into_iter().enumerate() {
                let table = &self.graph[child];
                for s in 0..states {
                    let mut q = Cost::INFINITY;
                    let mut n: Count = 0;
                    for t in 0..states {
                        let c = table.cost(t) + self.mutation.cost(s as u8, t as u8);
                        if c < q {
                            q = c;
                            n = table.count(t);
                        } else if c == q && c.is_finite() {
                            n += table.count(t);
                        }
                    }
                    self.qcost[slot * states + s] = q;
                    self.qcount[slot * states + s] = if q.is_finite() { n } else { 0 };
                }
            }
            let table = &mut self.graph[parent];
            for s in 0..states {
                let (qa, na) = (self.qcost[s], self.qcount[s]);
                let (qb, nb) = (self.qcost[states + s], self.qcount[states + s]);
                if qa.is_finite() && qb.is_finite() {
                    table.set(s, qa + qb, na * nb);
                } else {
                    table.set(s, Cost::INFINITY, 0);
                }
            }
        }
    }

    /// the pre-speciation cost: the expected number of mutations on
    /// the two root edges, averaged uniformly over every minimum-cost
    /// labeling of the tree. infinite when no root state is
    /// reachable, which the collector treats as "no candidate".
    pub fn prespeciation(&self) -> Cost {
        let root = &self.graph[self.root];
        let m = (0..self.states)
            .map(|s| root.cost(s))
            .fold(Cost::INFINITY, Cost::min);
        if !m.is_finite() {
            return Cost::INFINITY;
        }
        let mut recons: Count = 0;
        let mut mutations = 0.0;
        for s in (0..self.states).filter(|&s| root.cost(s) == m) {
            let n = root.count(s);
            assert!(n > 0, "minimal root state with no reconstruction");
            recons += n;
            for child in [self.split.0, self.split.1] {
                let table = &self.graph[child];
                let mut q = Cost::INFINITY;
                let mut ties: Count = 0;
                for t in 0..self.states {
                    let c = table.cost(t) + self.mutation.cost(s as u8, t as u8);
                    if c < q {
                        q = c;
                        ties = table.count(t);
                    } else if c == q && c.is_finite() {
                        ties += table.count(t);
                    }
                }
                assert!(ties > 0, "no admissible state under root child");
                assert!(n % ties == 0, "reconstruction count must divide");
                let weight = (n / ties) as Cost;
                for t in 0..self.states {
                    let c = table.cost(t) + self.mutation.cost(s as u8, t as u8);
                    if c == q {
                        mutations +=
                            self.mutation.cost(s as u8, t as u8) * table.count(t) as Cost * weight;
                    }
                }
            }
        }
        mutations / recons as Cost
    }

    /// score one column: fix the leaves, propagate, read the root
    pub fn cost_for(&mut self, column: &[u8]) -> Cost {
        self.fix_column(column);
        self.update();
        self.prespeciation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sankoff::phylogeny::Phylogeny;
    use rand::Rng;
    use rand::SeedableRng;

    fn smt(k: usize, states: usize) -> Smt {
        Smt::new(
            Topology::duplicate(&Phylogeny::comb(k), states),
            MutationCost::uniform(states),
        )
    }

    /// exhaustive small-phylogeny oracle: enumerate every labeling of
    /// the internal nodes, find the minimum total mutation count, and
    /// average the root-edge mutations over the minimal labelings.
    fn brute(smt: &Smt, column: &[u8]) -> Cost {
        let states = smt.states;
        let internals = smt
            .schedule
            .iter()
            .map(|&(parent, _)| parent)
            .collect::<Vec<_>>();
        let mut assignment = vec![0u8; smt.graph.node_count()];
        for (leaf, &s) in smt.leaves.iter().zip(column) {
            assignment[leaf.index()] = s;
        }
        let mut best = Cost::INFINITY;
        let mut count = 0u64;
        let mut rootsum = 0.0;
        let mut digits = vec![0usize; internals.len()];
        loop {
            for (digit, node) in digits.iter().zip(internals.iter()) {
                assignment[node.index()] = *digit as u8;
            }
            let mut total = 0.0;
            for &(parent, (a, b)) in smt.schedule.iter() {
                total += smt.mutation.cost(assignment[parent.index()], assignment[a.index()]);
                total += smt.mutation.cost(assignment[parent.index()], assignment[b.index()]);
            }
            let r = assignment[smt.root.index()];
            let edges = smt.mutation.cost(r, assignment[smt.split.0.index()])
                + smt.mutation.cost(r, assignment[smt.split.1.index()]);
            if total < best {
                best = total;
                count = 1;
                rootsum = edges;
            } else if total == best {
                count += 1;
                rootsum += edges;
            }
            let mut i = 0;
            loop {
                if i == digits.len() {
                    return rootsum / count as Cost;
                }
                digits[i] += 1;
                if digits[i] < states {
                    break;
                }
                digits[i] = 0;
                i += 1;
            }
        }
    }

    #[test]
    fn worked_example() {
        // three sequences, duplicated comb, column C,A,C,T,G,A over
        // {A,C,G,T}: 14 minimal labelings carrying 10 root-edge
        // mutations between them
        let mut smt = smt(3, 4);
        let cost = smt.cost_for(&[1, 0, 1, 3, 2, 0]);
        assert!((cost - 10.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn identical_halves_are_free() {
        let mut smt = smt(2, 5);
        assert!(smt.cost_for(&[0, 0, 0, 0]) == 0.0);
        assert!(smt.cost_for(&[3, 3, 3, 3]) == 0.0);
    }

    #[test]
    fn single_substitution_costs_one() {
        // both sequences read A on the left half and C on the right:
        // whatever the root takes, exactly one root edge mutates
        let mut smt = smt(2, 5);
        assert!(smt.cost_for(&[0, 0, 1, 1]) == 1.0);
    }

    #[test]
    fn update_is_idempotent() {
        let mut smt = smt(3, 4);
        smt.fix_column(&[1, 0, 1, 3, 2, 0]);
        smt.update();
        let once = smt.prespeciation();
        smt.update();
        assert!(smt.prespeciation() == once);
    }

    #[test]
    fn unfixed_tree_is_unreachable() {
        let mut smt = smt(2, 4);
        smt.update();
        assert!(smt.prespeciation() == Cost::INFINITY);
    }

    #[test]
    fn cost_is_bounded_by_two_edges() {
        let mut smt = smt(4, 5);
        let bound = 2.0 * smt.mutation.max();
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0x5eed);
        for _ in 0..64 {
            let column = (0..8).map(|_| rng.random_range(0..5) as u8).collect::<Vec<_>>();
            let cost = smt.cost_for(&column);
            assert!(cost >= 0.0 && cost <= bound);
        }
    }

    #[test]
    fn matches_exhaustive_enumeration_two_sequences() {
        let mut smt = smt(2, 5);
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0xd4a);
        for _ in 0..32 {
            let column = (0..4).map(|_| rng.random_range(0..5) as u8).collect::<Vec<_>>();
            let fast = smt.cost_for(&column);
            let slow = brute(&smt, &column);
            assert!((fast - slow).abs() < 1e-12, "column {:?}", column);
        }
    }

    #[test]
    fn matches_exhaustive_enumeration_three_sequences() {
        let mut smt = smt(3, 4);
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(42);
        for _ in 0..32 {
            let column = (0..6).map(|_| rng.random_range(0..4) as u8).collect::<Vec<_>>();
            let fast = smt.cost_for(&column);
            let slow = brute(&smt, &column);
            assert!((fast - slow).abs() < 1e-12, "column {:?}", column);
        }
    }

    #[test]
    fn ambiguity_fixes_through_sets() {
        // left halves read A; the right leaf of sequence 1 may be A
        // or G. the free reconstruction keeps everything A.
        let mut smt = smt(2, 5);
        smt.fix(0, &[0]);
        smt.fix(1, &[0]);
        smt.fix(2, &[0, 2]);
        smt.fix(3, &[0]);
        smt.update();
        assert!(smt.prespeciation() == 0.0);
    }
}
