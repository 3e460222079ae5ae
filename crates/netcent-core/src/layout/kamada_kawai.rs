//! Kamada-Kawai style layout via stress majorization.
//!
//! The target distance between two nodes is their weighted graph distance
//! (edge weight as length). The layout minimizes the stress
//!
//! ```text
//! Σ_{i<j} w_ij (‖x_i − x_j‖ − d_ij)²,   w_ij = d_ij⁻²
//! ```
//!
//! using localized majorization updates (Gansner, Koren & North 2004),
//! starting from the circular layout. Pairs in different components are
//! given a target distance one longer than the longest finite distance so
//! components sit side by side instead of flying apart.

use petgraph::algo::dijkstra;

use super::{Point, circular::circular_layout, layout_length, rescale};
use crate::graph::EdgeGraph;

const MIN_SHIFT: f64 = 1.0e-6;

/// Run up to `iterations` majorization sweeps.
#[must_use]
pub fn kamada_kawai_layout(g: &EdgeGraph, iterations: usize) -> Vec<Point> {
    let n = g.node_count();
    if n <= 1 {
        return vec![Point::default(); n];
    }

    let target = distance_matrix(g);
    let mut pos = circular_layout(n);

    for _ in 0..iterations {
        let mut max_shift: f64 = 0.0;

        for i in 0..n {
            let (mut num_x, mut num_y, mut den) = (0.0, 0.0, 0.0);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d_ij = target[i * n + j];
                let w_ij = 1.0 / (d_ij * d_ij);
                let current = pos[i].distance(pos[j]);
                let (ux, uy) = if current > f64::EPSILON {
                    ((pos[i].x - pos[j].x) / current, (pos[i].y - pos[j].y) / current)
                } else {
                    (0.0, 0.0)
                };
                num_x += w_ij * d_ij.mul_add(ux, pos[j].x);
                num_y += w_ij * d_ij.mul_add(uy, pos[j].y);
                den += w_ij;
            }

            let next = Point::new(num_x / den, num_y / den);
            max_shift = max_shift.max(next.distance(pos[i]));
            pos[i] = next;
        }

        if max_shift < MIN_SHIFT {
            break;
        }
    }

    rescale(&mut pos);
    pos
}

/// Row-major `n × n` matrix of weighted shortest-path lengths, with
/// unreachable pairs set to `max_finite + 1`.
fn distance_matrix(g: &EdgeGraph) -> Vec<f64> {
    let n = g.node_count();
    let mut d = vec![f64::INFINITY; n * n];

    for source in g.graph.node_indices() {
        let lengths = dijkstra(&g.graph, source, None, |e| layout_length(*e.weight()));
        for (target, length) in lengths {
            d[source.index() * n + target.index()] = length;
        }
    }

    let longest = d
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(0.0, f64::max);
    let unreachable = longest + 1.0;
    for x in &mut d {
        if !x.is_finite() {
            *x = unreachable;
        }
    }
    d
}
