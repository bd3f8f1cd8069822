use super::pattern::Pattern;
use super::strategy::Strategy;
use super::window::Window;
use crate::Cost;
use crate::sankoff::smt::Smt;
use crate::segments::pairs::SegmentPairs;
use std::collections::HashMap;

/// the one scoring loop every strategy specializes. the mutation tree
/// does the real work; the optional window decides how many columns a
/// position evaluates, and the optional pattern memo decides how many
/// evaluations actually reach the tree.
pub struct Scorer<'a> {
    smt: Smt,
    pairs: SegmentPairs<'a>,
    window: Option<Window>,
    memo: Option<HashMap<Pattern, Cost>>,
    column: Vec<u8>,
    ranks: Vec<u8>,
    scored: u64,
    missed: u64,
}

impl<'a> Scorer<'a> {
    pub fn new(strategy: Strategy, smt: Smt, pairs: SegmentPairs<'a>) -> Self {
        assert!(smt.width() == pairs.width(), "tree and alignment disagree");
        let width = pairs.width();
        let length = pairs.length();
        Self {
            smt,
            pairs,
            window: strategy.windowed().then(|| Window::new(length)),
            memo: strategy.memoized().then(HashMap::new),
            column: vec![0; width],
            ranks: Vec::with_capacity(width),
            scored: 0,
            missed: 0,
        }
    }

    /// average per-column pre-speciation cost of the pair (p, k)
    pub fn cost_for(&mut self, p: usize, k: usize) -> Cost {
        assert!(k >= 1 && p + 2 * k <= self.pairs.length(), "pair out of range");
        match self.window.take() {
            None => {
                let mut sum = 0.0;
                for j in 0..k {
                    sum += self.column_cost(p + j, k);
                }
                sum / k as Cost
            }
            Some(mut window) => {
                if p == 0 {
                    window.reset(k);
                    for i in 0..k {
                        let cost = self.column_cost(i, k);
                        window.prime(i, cost);
                    }
                } else {
                    let cost = self.column_cost(p + k - 1, k);
                    window.slide(p, k, cost);
                }
                let mean = window.mean();
                self.window = Some(window);
                mean
            }
        }
    }

    /// columns evaluated so far, memo hits included
    pub fn scored(&self) -> u64 {
        self.scored
    }
    /// columns that had to be scored by the tree
    pub fn missed(&self) -> u64 {
        self.missed
    }
    /// distinct patterns seen, when memoizing
    pub fn distinct(&self) -> Option<usize> {
        self.memo.as_ref().map(HashMap::len)
    }

    fn column_cost(&mut self, i: usize, k: usize) -> Cost {
        self.scored += 1;
        self.pairs.fill(i, k, &mut self.column);
        match self.memo {
            None => {
                self.missed += 1;
                self.smt.cost_for(&self.column)
            }
            Some(ref mut memo) => {
                Pattern::rank_into(&self.column, &mut self.ranks);
                match memo.get(self.ranks.as_slice()) {
                    Some(&cost) => cost,
                    None => {
                        self.missed += 1;
                        let cost = self.smt.cost_for(&self.column);
                        memo.insert(Pattern::from(self.ranks.as_slice()), cost);
                        cost
                    }
                }
            }
        }
    }
}
