use std::collections::BTreeMap;

use crate::error::{BoundaryError, Result};

use super::Edge;

/// Walks a boundary edge set into a single ordered cyclic sequence of vertex
/// indices.
///
/// The walk trusts nothing about its input: every touched vertex must have
/// degree exactly 2 before the first step, the step count is capped at the
/// number of edges, and any edges left over once the walk closes mean the
/// set held more than one cycle. Each failure mode reports the alpha value
/// that produced the edge set so the caller can retry with a larger one.
///
/// Adjacency lives in a `BTreeMap`, so the walk starts from the smallest
/// vertex index and the output cycle is deterministic.
#[derive(Debug)]
pub struct ReconstructPerimeter {
    alpha: f64,
}

impl ReconstructPerimeter {
    /// Creates a new reconstruction for edges produced at `alpha` (used only
    /// in error reports).
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Executes the walk, returning the vertex cycle (first and last adjacent,
    /// not duplicated).
    ///
    /// # Errors
    ///
    /// - `BoundaryError::EmptyBoundary` for an empty edge set
    /// - `BoundaryError::BranchingBoundary` if any vertex has degree ≠ 2
    /// - `BoundaryError::DisconnectedBoundary` if edges remain after the walk
    ///   returns to its start
    /// - `BoundaryError::WalkLimitExceeded` if the walk hits the step cap
    ///   without closing
    pub fn execute(&self, boundary_edges: &[Edge]) -> Result<Vec<usize>> {
        let mut adjacency: BTreeMap<usize, Vec<Edge>> = BTreeMap::new();
        for &edge in boundary_edges {
            let (a, b) = edge.endpoints();
            adjacency.entry(a).or_default().push(edge);
            adjacency.entry(b).or_default().push(edge);
        }

        let offending: Vec<usize> = adjacency
            .iter()
            .filter(|(_, incident)| incident.len() != 2)
            .map(|(&v, _)| v)
            .collect();
        if !offending.is_empty() {
            return Err(BoundaryError::BranchingBoundary {
                alpha: self.alpha,
                vertices: offending,
            }
            .into());
        }

        let Some(&start) = adjacency.keys().next() else {
            return Err(BoundaryError::EmptyBoundary { alpha: self.alpha }.into());
        };

        let total = boundary_edges.len();
        let mut cycle = Vec::with_capacity(total);
        let mut current = start;

        for _ in 0..total {
            cycle.push(current);
            let Some(edge) = adjacency.get_mut(&current).and_then(Vec::pop) else {
                // unreachable once the degree check passed; kept as the
                // liveness guard for the walk
                return Err(BoundaryError::WalkLimitExceeded {
                    alpha: self.alpha,
                    limit: total,
                }
                .into());
            };
            let next = edge.other(current);
            if let Some(far) = adjacency.get_mut(&next) {
                far.retain(|&e| e != edge);
            }
            current = next;
            if current == start {
                break;
            }
        }

        if current != start {
            return Err(BoundaryError::WalkLimitExceeded {
                alpha: self.alpha,
                limit: total,
            }
            .into());
        }
        if cycle.len() < total {
            return Err(BoundaryError::DisconnectedBoundary {
                alpha: self.alpha,
                unused: total - cycle.len(),
            }
            .into());
        }

        Ok(cycle)
    }
}
