use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::store::{NodeState, OpenEntry, RecordTable};
use crate::traits::{Heuristic, NeighborSource};

/// A path returned by [`PathFinder::search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    /// Nodes from start to goal, both inclusive.
    pub nodes: Vec<N>,
    /// Sum of the edge costs along `nodes`.
    pub cost: f64,
}

/// Single-source, single-goal A* search engine.
///
/// The engine is parameterised by two capabilities: a [`Heuristic`] used to
/// order the open set and a [`NeighborSource`] that expands nodes. It holds
/// no per-query state; every call allocates its own record table and open
/// set, so one `PathFinder` can serve any number of queries.
///
/// Expanded nodes are final and are never reopened, which assumes the
/// heuristic is consistent. Among open entries with equal `f`, the one pushed
/// first is expanded first.
#[derive(Debug, Clone)]
pub struct PathFinder<H, G> {
    heuristic: H,
    neighbors: G,
}

impl<H, G> PathFinder<H, G> {
    /// Create an engine from a heuristic and a neighbour source.
    pub fn new(heuristic: H, neighbors: G) -> Self {
        Self {
            heuristic,
            neighbors,
        }
    }

    /// The heuristic used to order the open set.
    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The neighbour source used to expand nodes.
    #[inline]
    pub fn neighbors(&self) -> &G {
        &self.neighbors
    }

    /// Compute the shortest path from `start` to `goal`.
    ///
    /// Returns the full path (including both endpoints) or `None` if `goal`
    /// cannot be reached from `start`.
    pub fn find_path<N>(&self, start: N, goal: N) -> Option<Vec<N>>
    where
        N: Clone + Eq + Hash,
        H: Heuristic<N>,
        G: NeighborSource<N>,
    {
        self.search(start, goal).map(|p| p.nodes)
    }

    /// Like [`find_path`](Self::find_path), also reporting the path cost.
    pub fn search<N>(&self, start: N, goal: N) -> Option<Path<N>>
    where
        N: Clone + Eq + Hash,
        H: Heuristic<N>,
        G: NeighborSource<N>,
    {
        let mut records = RecordTable::new();
        let found = self.run(&mut records, &start, &goal);
        found.map(|idx| Path {
            nodes: records.path_to(idx),
            cost: records[idx].g,
        })
    }

    /// Drive the open-list loop. Returns the index of the goal record.
    fn run<N>(&self, records: &mut RecordTable<N>, start: &N, goal: &N) -> Option<usize>
    where
        N: Clone + Eq + Hash,
        H: Heuristic<N>,
        G: NeighborSource<N>,
    {
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut expanded: usize = 0;

        // Initialise the start node.
        let start_idx = records.get_or_insert(start);
        {
            let h = self.heuristic.estimate(start, goal);
            let rec = &mut records[start_idx];
            rec.g = 0.0;
            rec.h = Some(h);
            rec.f = h;
            rec.state = NodeState::Open;
            rec.seq = seq;
            open.push(OpenEntry {
                idx: start_idx,
                f: h,
                seq,
            });
        }

        let mut nbuf: Vec<(N, f64)> = Vec::new();

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;

            // Skip entries superseded by a later push or already expanded.
            if records[ci].state != NodeState::Open || records[ci].seq != current.seq {
                continue;
            }

            if records[ci].node == *goal {
                break 'search Some(ci);
            }

            records[ci].state = NodeState::Closed;
            expanded += 1;
            let current_g = records[ci].g;
            log::trace!("astar: expanding record {ci} (g = {current_g}, f = {})", current.f);

            nbuf.clear();
            self.neighbors.neighbors(&records[ci].node, &mut nbuf);

            for (np, cost) in nbuf.drain(..) {
                debug_assert!(cost >= 0.0, "negative edge cost {cost}");
                let ni = records.get_or_insert(&np);
                if records[ni].state == NodeState::Closed {
                    continue;
                }

                let tentative_g = current_g + cost;
                if tentative_g >= records[ni].g {
                    continue;
                }

                let h = match records[ni].h {
                    Some(h) => h,
                    None => self.heuristic.estimate(&np, goal),
                };
                seq += 1;

                let n = &mut records[ni];
                n.g = tentative_g;
                n.h = Some(h);
                n.f = tentative_g + h;
                n.parent = Some(ci);
                n.state = NodeState::Open;
                n.seq = seq;

                open.push(OpenEntry {
                    idx: ni,
                    f: n.f,
                    seq,
                });
            }
        };

        log::debug!(
            "astar: {} after expanding {expanded} of {} discovered nodes",
            if found.is_some() { "reached goal" } else { "no path" },
            records.len(),
        );
        found
    }
}
