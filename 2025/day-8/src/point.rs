use glam::I64Vec3;

/// A junction box position. Its index in the input slice is its identity.
pub type Point = I64Vec3;

/// Largest accepted coordinate magnitude.
///
/// With `|c| <= MAX_COORD` every delta is at most `2 * MAX_COORD`, so a squared
/// distance is bounded by `3 * (2 * MAX_COORD)^2`, which stays below `i64::MAX`.
pub const MAX_COORD: i64 = 500_000_000;

/// Number of axes the spatial index cycles through.
pub const DIMENSIONS: usize = 3;

/// Exact squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(a: Point, b: Point) -> i64 {
    (a - b).length_squared()
}

/// Coordinate of `p` along `axis` (0 = x, 1 = y, 2 = z).
#[inline(always)]
pub fn axis_value(p: Point, axis: usize) -> i64 {
    p[axis]
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0, 0, 0), Point::new(0, 0, 0), 0)]
    #[case(Point::new(1, 2, 3), Point::new(4, 6, 3), 25)]
    #[case(Point::new(-5, 0, 0), Point::new(5, 0, 0), 100)]
    #[case(Point::new(162, 817, 812), Point::new(425, 690, 689), 100_427)]
    fn squared_distance_is_exact(#[case] a: Point, #[case] b: Point, #[case] expected: i64) {
        assert_eq!(squared_distance(a, b), expected);
        assert_eq!(squared_distance(b, a), expected);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::splat(-MAX_COORD);
        let b = Point::splat(MAX_COORD);
        let delta = 2 * MAX_COORD;
        assert_eq!(squared_distance(a, b), 3 * delta * delta);
    }

    #[test]
    fn axis_value_cycles_xyz() {
        let p = Point::new(7, -8, 9);
        assert_eq!(axis_value(p, 0), 7);
        assert_eq!(axis_value(p, 1), -8);
        assert_eq!(axis_value(p, 2), 9);
    }
}
