//! Generic A* search with a 2D grid specialization.
//!
//! The engine, [`PathFinder`], answers one single-source, single-goal
//! shortest-path query per call. It is parameterised by two capabilities:
//!
//! | Trait | Role |
//! |---|---|
//! | [`Heuristic`] | estimate of the remaining cost, orders the open set |
//! | [`NeighborSource`] | enumerates `(neighbor, cost)` pairs of a node |
//!
//! Both traits are implemented for plain closures, so arbitrary graphs can be
//! searched without defining new types:
//!
//! ```
//! use trailhead_paths::PathFinder;
//!
//! let pf = PathFinder::new(
//!     |a: &i32, b: &i32| f64::from((a - b).abs()),
//!     |n: &i32| [(n - 1, 1.0), (n + 1, 1.0)],
//! );
//! assert_eq!(pf.find_path(0, 3), Some(vec![0, 1, 2, 3]));
//! ```
//!
//! The [`grid`] module wires the engine to integer grid cells with a
//! Euclidean heuristic, and [`dijkstra_map`] computes full cost fields over
//! the same neighbour capability.

mod astar;
mod dijkstra;
mod distance;
pub mod grid;
mod store;
mod traits;

pub use astar::{Path, PathFinder};
pub use dijkstra::{PathNode, dijkstra_map};
pub use distance::{chebyshev, euclidean, manhattan};
pub use grid::{Euclidean, GridConfig, GridNeighbors, GridPathFinder, grid_path_finder};
pub use traits::{Heuristic, NeighborSource};
pub use trailhead_core::Location;
