use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::store::{NodeState, OpenEntry, RecordTable};
use crate::traits::NeighborSource;

/// A node with an associated cost, returned from [`dijkstra_map`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<N> {
    pub node: N,
    pub cost: f64,
}

/// Compute a multi-source Dijkstra distance map.
///
/// Every source starts at cost 0. Nodes whose cumulative cost would exceed
/// `max_cost` are neither expanded nor reported. Returns every reached node
/// once, in non-decreasing cost order.
pub fn dijkstra_map<N, G>(neighbors: &G, sources: &[N], max_cost: f64) -> Vec<PathNode<N>>
where
    N: Clone + Eq + Hash,
    G: NeighborSource<N>,
{
    let mut records = RecordTable::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut results = Vec::new();
    let mut seq: u64 = 0;

    // Seed sources.
    for src in sources {
        let si = records.get_or_insert(src);
        let n = &mut records[si];
        if n.state != NodeState::Unvisited {
            continue;
        }
        n.g = 0.0;
        n.f = 0.0;
        n.state = NodeState::Open;
        n.seq = seq;
        open.push(OpenEntry { idx: si, f: 0.0, seq });
        seq += 1;
    }

    let mut nbuf: Vec<(N, f64)> = Vec::new();

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if records[ci].state != NodeState::Open || records[ci].seq != current.seq {
            continue;
        }
        records[ci].state = NodeState::Closed;
        let current_g = records[ci].g;

        results.push(PathNode {
            node: records[ci].node.clone(),
            cost: current_g,
        });

        nbuf.clear();
        neighbors.neighbors(&records[ci].node, &mut nbuf);

        for (np, cost) in nbuf.drain(..) {
            let tentative = current_g + cost;
            if tentative > max_cost {
                continue;
            }

            let ni = records.get_or_insert(&np);
            let n = &mut records[ni];
            if n.state == NodeState::Closed || tentative >= n.g {
                continue;
            }

            n.g = tentative;
            n.f = tentative;
            n.state = NodeState::Open;
            n.seq = seq;
            open.push(OpenEntry {
                idx: ni,
                f: tentative,
                seq,
            });
            seq += 1;
        }
    }

    log::debug!(
        "dijkstra: settled {} nodes from {} sources",
        results.len(),
        sources.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: &i32) -> Vec<(i32, f64)> {
        let mut out = Vec::new();
        if *n > 0 {
            out.push((n - 1, 1.0));
        }
        if *n < 9 {
            out.push((n + 1, 1.0));
        }
        out
    }

    #[test]
    fn single_source_costs() {
        let map = dijkstra_map(&line, &[0], f64::INFINITY);
        assert_eq!(map.len(), 10);
        for p in &map {
            assert_eq!(p.cost, f64::from(p.node));
        }
    }

    #[test]
    fn costs_are_non_decreasing_and_unique() {
        let map = dijkstra_map(&line, &[4], f64::INFINITY);
        assert!(map.windows(2).all(|w| w[0].cost <= w[1].cost));
        let mut nodes: Vec<_> = map.iter().map(|p| p.node).collect();
        nodes.sort();
        nodes.dedup();
        assert_eq!(nodes.len(), map.len());
    }

    #[test]
    fn multi_source_takes_nearest() {
        let map = dijkstra_map(&line, &[0, 9, 0], f64::INFINITY);
        let cost = |n: i32| map.iter().find(|p| p.node == n).map(|p| p.cost);
        assert_eq!(cost(0), Some(0.0));
        assert_eq!(cost(9), Some(0.0));
        assert_eq!(cost(4), Some(4.0));
        assert_eq!(cost(6), Some(3.0));
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn max_cost_limits_expansion() {
        let map = dijkstra_map(&line, &[0], 3.0);
        let nodes: Vec<_> = map.iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn no_sources_reaches_nothing() {
        let sources: [i32; 0] = [];
        assert!(dijkstra_map(&line, &sources, f64::INFINITY).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            node: (3, 7),
            cost: 4.5,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode<(i32, i32)> = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
