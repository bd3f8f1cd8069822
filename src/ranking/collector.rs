use super::candidate::Candidate;
use std::collections::BinaryHeap;

/// the N cheapest candidates seen so far. the heap is max-first
/// under the candidate order, so its root is the worst survivor and
/// admission is one peek: strictly better pops it, anything else is
/// dropped on the floor. unreachable (infinite) costs never enter,
/// and a zero capacity collects nothing.
pub struct Collector {
    capacity: usize,
    heap: BinaryHeap<Candidate>,
}

impl Collector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(1 << 20)),
        }
    }

    pub fn add(&mut self, candidate: Candidate) {
        if !candidate.cost().is_finite() {
            return;
        }
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
        } else if candidate < *self.heap.peek().expect("capacity is positive") {
            self.heap.pop();
            self.heap.push(candidate);
        }
    }

    /// survivors in ascending order, best first
    pub fn ranked(&self) -> Vec<Candidate> {
        self.heap.clone().into_sorted_vec()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
