//! Spring layout (Fruchterman-Reingold).
//!
//! Nodes repel each other with force `k²/d` and adjacent nodes attract with
//! force `w·d²/k`, where `k = sqrt(1/n)` is the ideal edge length and `w` the
//! edge weight (heavier edges pull harder). Each round moves every node along
//! its net force by at most the current temperature, which cools linearly
//! from 10% of the initial extent to zero.
//!
//! Starts from the seeded random layout, so results are reproducible.

use petgraph::visit::EdgeRef;

use super::{Point, layout_length, random::random_layout, rescale};
use crate::graph::EdgeGraph;

const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1.0e-4;

/// Run `iterations` rounds of Fruchterman-Reingold from a seeded start.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spring_layout(g: &EdgeGraph, iterations: usize, seed: u64) -> Vec<Point> {
    let n = g.node_count();
    if n <= 1 {
        return vec![Point::default(); n];
    }

    let attraction = dense_weights(g);
    let mut pos = random_layout(n, seed);

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = initial_extent(&pos) * 0.1;
    let cooling = temperature / (iterations + 1) as f64;

    for _ in 0..iterations {
        let mut displacement = vec![Point::default(); n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let d = dx.hypot(dy).max(MIN_DISTANCE);
                let force = k * k / (d * d) - attraction[i * n + j] * d / k;
                displacement[i].x += dx * force;
                displacement[i].y += dy * force;
            }
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let mut length = disp.x.hypot(disp.y);
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step_x = disp.x * temperature / length;
            let step_y = disp.y * temperature / length;
            p.x += step_x;
            p.y += step_y;
            moved += step_x * step_x + step_y * step_y;
        }

        temperature -= cooling;
        if moved.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(&mut pos);
    pos
}

/// Row-major `n × n` attraction matrix; self-loops contribute nothing.
fn dense_weights(g: &EdgeGraph) -> Vec<f64> {
    let n = g.node_count();
    let mut a = vec![0.0; n * n];
    for edge in g.graph.edge_references() {
        let i = edge.source().index();
        let j = edge.target().index();
        if i != j {
            let w = layout_length(*edge.weight());
            a[i * n + j] = w;
            a[j * n + i] = w;
        }
    }
    a
}

fn initial_extent(pos: &[Point]) -> f64 {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in pos {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (max_x - min_x).max(max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::EdgeRecord;

    fn graph(edges: &[(&str, &str)]) -> EdgeGraph {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(a, b)| EdgeRecord::new(a, "t", b, 1.0))
            .collect();
        EdgeGraph::from_records(&records)
    }

    #[test]
    fn trivial_graphs() {
        assert!(spring_layout(&EdgeGraph::default(), 50, 1).is_empty());
        assert_eq!(spring_layout(&graph(&[("A", "A")]), 50, 1), vec![Point::default()]);
    }

    #[test]
    fn output_is_rescaled() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")]);
        let pts = spring_layout(&g, 50, 42);
        let max = pts
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn connected_nodes_end_closer_than_disconnected() {
        // Two tight pairs with no edge between them.
        let g = graph(&[("A", "B"), ("C", "D")]);
        let pts = spring_layout(&g, 200, 3);
        let ab = pts[0].distance(pts[1]);
        let ac = pts[0].distance(pts[2]);
        let bd = pts[1].distance(pts[3]);
        assert!(ab < ac.max(bd), "pair should sit closer: ab={ab} ac={ac} bd={bd}");
    }
}
