//! Circular layout: node `i` of `n` sits at angle `2πi/n` on the unit circle.

use std::f64::consts::TAU;

use super::Point;

/// Evenly space `n` nodes on the unit circle. A single node sits at the
/// origin.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular_layout(n: usize) -> Vec<Point> {
    if n == 1 {
        return vec![Point::default()];
    }
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            Point::new(theta.cos(), theta.sin())
        })
        .collect()
}
