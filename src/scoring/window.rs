use crate::Cost;

/// rolling per-column costs for one segment length. moving a pair
/// from p-1 to p swaps exactly one column in and one out, so each
/// position past the first costs a single column evaluation. sound
/// only while the caller sweeps p upward from 0 for each fixed k;
/// anything else is a contract violation and fails loudly.
pub struct Window {
    cells: Vec<Cost>,
    sum: Cost,
    length: usize,
    cursor: usize,
}

impl Window {
    pub fn new(l: usize) -> Self {
        Self {
            cells: vec![0.0; l],
            sum: 0.0,
            length: 0,
            cursor: 0,
        }
    }

    /// begin the sweep for segment length k
    pub fn reset(&mut self, k: usize) {
        assert!(k >= 1 && 2 * k <= self.cells.len(), "window length out of range");
        self.sum = 0.0;
        self.length = k;
        self.cursor = 0;
    }

    /// record one of the first k column costs, absolute index i
    pub fn prime(&mut self, i: usize, cost: Cost) {
        assert!(self.cursor == 0, "window already primed");
        assert!(i < self.length, "priming past the first pair");
        self.cells[i] = cost;
        self.sum += cost;
    }

    /// the sweep moved to position p: drop the column that left,
    /// admit the one that entered at index p+k-1
    pub fn slide(&mut self, p: usize, k: usize, cost: Cost) {
        assert!(
            k == self.length && p == self.cursor + 1,
            "window strategy requires positions ascending from 0 per length"
        );
        self.sum -= self.cells[p - 1];
        self.cells[p + k - 1] = cost;
        self.sum += cost;
        self.cursor = p;
    }

    /// average column cost of the pair the window currently covers
    pub fn mean(&self) -> Cost {
        assert!(self.length > 0, "window not primed");
        self.sum / self.length as Cost
    }
}
