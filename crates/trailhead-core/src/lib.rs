//! **trailhead-core** — geometry primitives shared by the trailhead crates.
//!
//! This crate provides [`Location`], the integer grid coordinate used by the
//! 2D grid specialization of the search engine, together with the compass
//! offset tables used to enumerate grid neighbours.

pub mod geom;

pub use geom::{CARDINAL_OFFSETS, Location, OCTILE_OFFSETS};
