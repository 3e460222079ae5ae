//! Random layout: independent uniform coordinates in `[0, 1)²`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Point;

/// Place `n` nodes uniformly at random, reproducibly for a given `seed`.
#[must_use]
pub fn random_layout(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_square() {
        for p in random_layout(200, 7) {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn seed_controls_placement() {
        assert_eq!(random_layout(10, 1), random_layout(10, 1));
        assert_ne!(random_layout(10, 1), random_layout(10, 2));
    }
}
