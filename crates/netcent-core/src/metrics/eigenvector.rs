//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores nodes based on the idea that connections to
//! high-scoring nodes contribute more to a node's score. It's the dominant
//! eigenvector of the weighted adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on `A + I` (the identity shift keeps the iteration from
//! oscillating on bipartite graphs without changing the eigenvectors):
//!
//! 1. Initialize scores uniformly to `1/n`.
//! 2. For each node `v`: `score'(v) = score(v) + Σ w(u, v) · score(u)`.
//! 3. Normalize the score vector to unit L2 norm.
//! 4. Stop once the L1 change is below `n · tolerance`.
//!
//! Exhausting `max_iter` is an error rather than a silent fallback: a
//! half-converged vector would misreport centrality.
//!
//! # Output
//!
//! Scores in node-index order. With non-negative weights every score is
//! non-negative.

use tracing::{debug, instrument};

use crate::error::{NetcentError, Result};
use crate::graph::EdgeGraph;

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone)]
pub struct EigenvectorResult {
    /// Scores in node-index order.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Compute weighted eigenvector centrality for all nodes.
///
/// # Arguments
///
/// * `g`: the graph; edge weights are adjacency weights.
/// * `max_iter`: maximum number of power iterations.
/// * `tolerance`: per-node convergence threshold.
///
/// # Errors
///
/// Returns [`NetcentError::Convergence`] if the iteration has not converged
/// after `max_iter` rounds.
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality(
    g: &EdgeGraph,
    max_iter: usize,
    tolerance: f64,
) -> Result<EigenvectorResult> {
    let n = g.node_count();

    if n == 0 {
        return Ok(EigenvectorResult {
            scores: Vec::new(),
            iterations: 0,
        });
    }

    let adjacency = g.adjacency();
    let threshold = n as f64 * tolerance;
    let mut scores: Vec<f64> = vec![1.0 / n as f64; n];

    for iter in 0..max_iter {
        let mut next = scores.clone();

        for (v, nbrs) in adjacency.iter().enumerate() {
            for &(u, w) in nbrs {
                next[u] += scores[v] * w;
            }
        }

        // Normalize to unit L2 norm.
        let norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = next;

        if diff < threshold {
            debug!(iterations = iter + 1, "eigenvector centrality converged");
            return Ok(EigenvectorResult {
                scores,
                iterations: iter + 1,
            });
        }
    }

    Err(NetcentError::Convergence {
        iterations: max_iter,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
