use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Per-node search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// Discovered but not yet pushed onto the open set.
    Unvisited,
    Open,
    Closed,
}

/// Transient bookkeeping for one discovered node.
#[derive(Clone, Debug)]
pub(crate) struct SearchRecord<N> {
    pub(crate) node: N,
    pub(crate) state: NodeState,
    pub(crate) g: f64,
    /// Heuristic estimate to the goal, `None` until first needed.
    pub(crate) h: Option<f64>,
    pub(crate) f: f64,
    pub(crate) parent: Option<usize>,
    /// Sequence number of the latest open-set push for this record.
    pub(crate) seq: u64,
}

impl<N> SearchRecord<N> {
    fn new(node: N) -> Self {
        Self {
            node,
            state: NodeState::Unvisited,
            g: f64::INFINITY,
            h: None,
            f: f64::INFINITY,
            parent: None,
            seq: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Record table
// ---------------------------------------------------------------------------

/// Arena of [`SearchRecord`]s keyed by node.
///
/// Records are only materialized on first discovery, so unbounded graphs are
/// fine. Parent links are arena indices and stay valid as the arena grows.
pub(crate) struct RecordTable<N> {
    records: Vec<SearchRecord<N>>,
    index: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash> RecordTable<N> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Index of the record for `node`, creating an unvisited one if needed.
    pub(crate) fn get_or_insert(&mut self, node: &N) -> usize {
        match self.index.entry(node.clone()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let idx = self.records.len();
                self.records.push(SearchRecord::new(node.clone()));
                e.insert(idx);
                idx
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn find(&self, node: &N) -> Option<&SearchRecord<N>> {
        self.index.get(node).map(|&i| &self.records[i])
    }

    /// Nodes from the start record to `idx`, following parent links.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(ci) = cur {
            let rec = &self.records[ci];
            path.push(rec.node.clone());
            cur = rec.parent;
        }
        path.reverse();
        path
    }
}

impl<N> RecordTable<N> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

impl<N> std::ops::Index<usize> for RecordTable<N> {
    type Output = SearchRecord<N>;
    #[inline]
    fn index(&self, idx: usize) -> &SearchRecord<N> {
        &self.records[idx]
    }
}

impl<N> std::ops::IndexMut<usize> for RecordTable<N> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut SearchRecord<N> {
        &mut self.records[idx]
    }
}

// ---------------------------------------------------------------------------
// Open set entries
// ---------------------------------------------------------------------------

/// Reference into the record table, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; among equal `f`, the earliest push pops first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn get_or_insert_is_lazy_and_stable() {
        let mut table: RecordTable<&str> = RecordTable::new();
        assert_eq!(table.len(), 0);
        let a = table.get_or_insert(&"a");
        let b = table.get_or_insert(&"b");
        assert_ne!(a, b);
        assert_eq!(table.get_or_insert(&"a"), a);
        assert_eq!(table.len(), 2);

        let rec = &table[b];
        assert_eq!(rec.node, "b");
        assert_eq!(rec.state, NodeState::Unvisited);
        assert_eq!(rec.g, f64::INFINITY);
        assert!(rec.parent.is_none());
    }

    #[test]
    fn path_follows_parents_from_start() {
        let mut table = RecordTable::new();
        let s = table.get_or_insert(&1);
        let m = table.get_or_insert(&2);
        let g = table.get_or_insert(&3);
        table[m].parent = Some(s);
        table[g].parent = Some(m);
        assert_eq!(table.path_to(g), vec![1, 2, 3]);
        assert_eq!(table.path_to(s), vec![1]);
        assert_eq!(table.find(&2).map(|r| r.parent), Some(Some(s)));
        assert!(table.find(&9).is_none());
    }

    #[test]
    fn open_entries_pop_lowest_f_then_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { idx: 0, f: 3.0, seq: 0 });
        heap.push(OpenEntry { idx: 1, f: 1.5, seq: 1 });
        heap.push(OpenEntry { idx: 2, f: 1.5, seq: 2 });
        heap.push(OpenEntry { idx: 3, f: 0.5, seq: 3 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}
