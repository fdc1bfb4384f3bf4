use trailhead_core::Location;

/// Euclidean (L2) distance between two locations.
#[inline]
pub fn euclidean(a: Location, b: Location) -> f64 {
    a.distance_to(b)
}

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two locations.
#[inline]
pub fn chebyshev(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_agree_on_axis() {
        let a = Location::new(2, 3);
        let b = Location::new(2, 7);
        assert_eq!(euclidean(a, b), 4.0);
        assert_eq!(manhattan(a, b), 4);
        assert_eq!(chebyshev(a, b), 4);
    }

    #[test]
    fn metrics_on_diagonal() {
        let a = Location::new(0, 0);
        let b = Location::new(-3, 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }
}
