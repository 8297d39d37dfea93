pub mod brute_force;
pub mod candidates;
pub mod edge;
pub mod engine;
pub mod kdtree;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod point;
pub mod union_find;

#[cfg(test)]
pub(crate) mod fixtures {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::point::Point;

    pub const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    /// Seeded uniform point cloud inside `[-extent, extent]^3`.
    pub fn scatter(n: usize, seed: u64, extent: i64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(-extent..=extent),
                    rng.random_range(-extent..=extent),
                    rng.random_range(-extent..=extent),
                )
            })
            .collect()
    }

    #[test]
    fn scatter_is_reproducible_and_bounded() {
        let first = scatter(200, 42, 1_000);
        assert_eq!(first, scatter(200, 42, 1_000));
        assert!(first
            .iter()
            .all(|p| p.to_array().iter().all(|c| c.abs() <= 1_000)));
        assert_ne!(first, scatter(200, 43, 1_000));
    }
}
