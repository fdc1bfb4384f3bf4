//! Geometry primitives: [`Location`] and the neighbour offset tables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// An integer grid cell. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a location shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Like [`shift`](Self::shift), but `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Straight-line (Euclidean) distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Location) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        let d = other - self;
        d != Self::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1
    }
}

// --- trait impls for Location ---

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Location {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Location {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Offsets
// ---------------------------------------------------------------------------

/// The four axis-aligned offsets (up, right, down, left).
pub const CARDINAL_OFFSETS: [Location; 4] = [
    Location::new(0, -1),
    Location::new(1, 0),
    Location::new(0, 1),
    Location::new(-1, 0),
];

/// All eight offsets of `{-1, 0, 1}²` minus the origin, in row-major order.
pub const OCTILE_OFFSETS: [Location; 8] = [
    Location::new(-1, -1),
    Location::new(0, -1),
    Location::new(1, -1),
    Location::new(-1, 0),
    Location::new(1, 0),
    Location::new(-1, 1),
    Location::new(0, 1),
    Location::new(1, 1),
];


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn location_round_trip() {
        let loc = Location::new(3, -7);
        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
