use crate::Cost;

/// the mutation cost function of one run, precomputed into a flat
/// |S|×|S| matrix indexed by state id pairs. the pattern strategies
/// are only sound when the cost depends on nothing but whether the
/// two states are equal; that property is detected at construction.
#[derive(Debug, Clone)]
pub struct MutationCost {
    states: usize,
    table: Vec<Cost>,
    uniform: bool,
}

impl MutationCost {
    /// the default 0/1 cost: free to keep a state, one unit to change it
    pub fn uniform(states: usize) -> Self {
        Self::from_fn(states, |s, t| if s == t { 0.0 } else { 1.0 })
    }

    pub fn from_fn<F>(states: usize, cost: F) -> Self
    where
        F: Fn(u8, u8) -> Cost,
    {
        assert!(states >= 1, "empty state space");
        assert!(states <= u8::MAX as usize + 1, "state space too large");
        let mut table = Vec::with_capacity(states * states);
        for s in 0..states {
            for t in 0..states {
                let c = cost(s as u8, t as u8);
                assert!(c >= 0.0 && c.is_finite(), "mutation cost must be finite and non-negative");
                table.push(c);
            }
        }
        let uniform = Self::equality_only(&table, states);
        Self { states, table, uniform }
    }

    pub fn cost(&self, s: u8, t: u8) -> Cost {
        self.table[s as usize * self.states + t as usize]
    }
    pub fn states(&self) -> usize {
        self.states
    }
    /// true iff the cost depends only on equality of its arguments
    pub fn is_equality_only(&self) -> bool {
        self.uniform
    }
    pub fn max(&self) -> Cost {
        self.table.iter().copied().fold(0.0, Cost::max)
    }

    fn equality_only(table: &[Cost], states: usize) -> bool {
        let diagonal = table[0];
        let mut offdiagonal = None;
        for s in 0..states {
            for t in 0..states {
                let c = table[s * states + t];
                if s == t {
                    if c != diagonal {
                        return false;
                    }
                } else {
                    match offdiagonal {
                        None => offdiagonal = Some(c),
                        Some(o) if o == c => continue,
                        Some(_) => return false,
                    }
                }
            }
        }
        true
    }
}
