//! Min-priority frontier with insertion-order tie-breaking.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Index of an expansion record in the search arena.
pub type NodeId = usize;

/// A pending state with the cost of the path that produced it.
#[derive(Debug)]
pub(super) struct Entry<S, C> {
    pub state: S,
    pub cost: C,
    pub parent: Option<NodeId>,
}

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest `(priority, seq)` first.
struct Keyed<S, C> {
    key: Reverse<(C, u64)>,
    entry: Entry<S, C>,
}

impl<S, C: Ord> PartialEq for Keyed<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, C: Ord> Eq for Keyed<S, C> {}

impl<S, C: Ord> PartialOrd for Keyed<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> Ord for Keyed<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Pending states ordered by priority, then by insertion sequence.
///
/// Stale entries (states whose signature has since been expanded) are not
/// removed here; the engine discards them when they are popped.
pub(super) struct Frontier<S, C> {
    heap: BinaryHeap<Keyed<S, C>>,
    next_seq: u64,
    high_water: usize,
}

impl<S, C: Ord + Copy> Frontier<S, C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    pub fn push(&mut self, entry: Entry<S, C>, priority: C) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Keyed {
            key: Reverse((priority, seq)),
            entry,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<Entry<S, C>> {
        self.heap.pop().map(|keyed| keyed.entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier reached
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(state: &'static str, cost: u32) -> Entry<&'static str, u32> {
        Entry {
            state,
            cost,
            parent: None,
        }
    }

    #[test]
    fn pop_returns_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(entry("a", 10), 10);
        frontier.push(entry("b", 5), 5);
        frontier.push(entry("c", 15), 15);

        assert_eq!(frontier.pop().unwrap().state, "b");
        assert_eq!(frontier.pop().unwrap().state, "a");
        assert_eq!(frontier.pop().unwrap().state, "c");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for name in ["first", "second", "third"] {
            frontier.push(entry(name, 3), 3);
        }

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|e| e.state).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn priority_can_differ_from_cost() {
        // A* ordering: priority = cost + heuristic
        let mut frontier = Frontier::new();
        frontier.push(entry("cheap-but-far", 1), 20);
        frontier.push(entry("dear-but-near", 8), 9);

        let first = frontier.pop().unwrap();
        assert_eq!(first.state, "dear-but-near");
        assert_eq!(first.cost, 8);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = Frontier::new();
        frontier.push(entry("a", 1), 1);
        frontier.push(entry("b", 2), 2);
        frontier.push(entry("c", 3), 3);
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.high_water(), 3, "high water should not decrease on pop");

        frontier.push(entry("d", 0), 0);
        assert_eq!(frontier.high_water(), 3);
        assert_eq!(frontier.len(), 2);
    }
}
