/// Estimate of the remaining cost between two nodes.
///
/// Estimates must be non-negative. The engine never reopens an expanded node,
/// so the returned path is only guaranteed optimal when the estimate is
/// consistent: `estimate(a, goal) <= cost(a, b) + estimate(b, goal)` for every
/// edge `a -> b`.
pub trait Heuristic<N> {
    fn estimate(&self, from: &N, to: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    #[inline]
    fn estimate(&self, from: &N, to: &N) -> f64 {
        self(from, to)
    }
}

/// Neighbour enumeration with edge costs.
pub trait NeighborSource<N> {
    /// Append `(neighbor, cost)` pairs reachable from `node` into `buf`.
    /// The caller clears `buf` before calling. Costs must be >= 0.
    fn neighbors(&self, node: &N, buf: &mut Vec<(N, f64)>);
}

impl<N, F, I> NeighborSource<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = (N, f64)>,
{
    #[inline]
    fn neighbors(&self, node: &N, buf: &mut Vec<(N, f64)>) {
        buf.extend(self(node));
    }
}
