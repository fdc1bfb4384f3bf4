//! 2D grid specialization of the search engine.
//!
//! Grid storage and passability stay with the caller: the adapter only sees a
//! `Fn(i32, i32) -> bool` predicate, which is also responsible for bounds.

use trailhead_core::{CARDINAL_OFFSETS, Location, OCTILE_OFFSETS};

use crate::astar::{Path, PathFinder};
use crate::traits::{Heuristic, NeighborSource};

/// Cost charged for every grid step, diagonal or not.
pub const STEP_COST: f64 = 1.0;

/// Grid adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Allow moves to the four diagonal cells (8-way) instead of only the
    /// four cardinal cells (4-way).
    pub allow_diagonal: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
        }
    }
}

impl GridConfig {
    /// Return this configuration with diagonal moves enabled or disabled.
    pub fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }
}

/// Straight-line distance heuristic for [`Location`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic<Location> for Euclidean {
    #[inline]
    fn estimate(&self, from: &Location, to: &Location) -> f64 {
        from.distance_to(*to)
    }
}

/// Neighbour enumeration over a grid described by a passability predicate.
///
/// Every passable neighbour is yielded with [`STEP_COST`].
#[derive(Clone)]
pub struct GridNeighbors<F> {
    is_passable: F,
    allow_diagonal: bool,
}

impl<F> GridNeighbors<F>
where
    F: Fn(i32, i32) -> bool,
{
    /// Create an 8-way neighbour source.
    pub fn new(is_passable: F) -> Self {
        Self::with_config(is_passable, GridConfig::default())
    }

    /// Create a neighbour source with the given configuration.
    pub fn with_config(is_passable: F, config: GridConfig) -> Self {
        Self {
            is_passable,
            allow_diagonal: config.allow_diagonal,
        }
    }

    /// Whether diagonal neighbours are enumerated.
    #[inline]
    pub fn allows_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    /// Ask the caller's predicate whether `loc` can be entered.
    #[inline]
    pub fn is_passable(&self, loc: Location) -> bool {
        (self.is_passable)(loc.x, loc.y)
    }

    fn offsets(&self) -> &'static [Location] {
        if self.allow_diagonal {
            &OCTILE_OFFSETS
        } else {
            &CARDINAL_OFFSETS
        }
    }
}

impl<F> NeighborSource<Location> for GridNeighbors<F>
where
    F: Fn(i32, i32) -> bool,
{
    fn neighbors(&self, node: &Location, buf: &mut Vec<(Location, f64)>) {
        for &d in self.offsets() {
            // Cells past the i32 range do not exist.
            let Some(n) = node.checked_shift(d.x, d.y) else {
                continue;
            };
            if self.is_passable(n) {
                buf.push((n, STEP_COST));
            }
        }
    }
}

impl<F> std::fmt::Debug for GridNeighbors<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridNeighbors")
            .field("allow_diagonal", &self.allow_diagonal)
            .finish_non_exhaustive()
    }
}

/// A* over a 2D grid with the Euclidean heuristic.
///
/// Both endpoints must satisfy the passability predicate, so every cell of a
/// returned path is passable. Since diagonal steps cost the same as cardinal
/// ones, the Euclidean estimate can exceed the true remaining cost on 8-way
/// grids, and paths there are short but not guaranteed minimal.
#[derive(Clone)]
pub struct GridPathFinder<F> {
    engine: PathFinder<Euclidean, GridNeighbors<F>>,
}

impl<F> GridPathFinder<F>
where
    F: Fn(i32, i32) -> bool,
{
    /// Create a grid path finder from a passability predicate.
    pub fn new(is_passable: F, config: GridConfig) -> Self {
        Self {
            engine: PathFinder::new(Euclidean, GridNeighbors::with_config(is_passable, config)),
        }
    }

    /// The underlying generic engine.
    #[inline]
    pub fn engine(&self) -> &PathFinder<Euclidean, GridNeighbors<F>> {
        &self.engine
    }

    /// The neighbour source, including the passability predicate.
    #[inline]
    pub fn neighbors(&self) -> &GridNeighbors<F> {
        self.engine.neighbors()
    }

    /// Compute a path from `start` to `goal`.
    ///
    /// Returns `None` if either endpoint is impassable or `goal` cannot be
    /// reached.
    pub fn find_path(&self, start: Location, goal: Location) -> Option<Vec<Location>> {
        self.search(start, goal).map(|p| p.nodes)
    }

    /// Like [`find_path`](Self::find_path), also reporting the path cost.
    pub fn search(&self, start: Location, goal: Location) -> Option<Path<Location>> {
        let nb = self.engine.neighbors();
        if !nb.is_passable(start) || !nb.is_passable(goal) {
            log::debug!("grid: endpoint {start} or {goal} is impassable");
            return None;
        }
        self.engine.search(start, goal)
    }
}

impl<F> std::fmt::Debug for GridPathFinder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridPathFinder")
            .field("engine", &self.engine)
            .finish()
    }
}

/// Build a [`GridPathFinder`] from a passability predicate.
pub fn grid_path_finder<F>(is_passable: F, config: GridConfig) -> GridPathFinder<F>
where
    F: Fn(i32, i32) -> bool,
{
    GridPathFinder::new(is_passable, config)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = GridConfig {
            allow_diagonal: false,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GridConfig::default());
    }
}
