//! On-disk dataset model.

use serde::{Deserialize, Serialize};

use crate::{error::PayloadError, generate::WEIGHT_RANGE};

/// Weighted directed edge `u -> v`.
///
/// The derived ordering compares `(u, v, w)` lexicographically, which is the
/// order edges are stored in a payload.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Edge {
    /// Tail node.
    pub u: usize,
    /// Head node.
    pub v: usize,
    /// Positive weight in `1..=9`.
    pub w: u32,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub const fn new(u: usize, v: usize, w: u32) -> Self {
        Self { u, v, w }
    }
}

/// Where weights live in the dataset; only per-edge weights are produced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightModel {
    /// Weights are attached to edges.
    #[default]
    Edge,
}

/// Serialized dataset: a directed graph, its source node and weight model.
///
/// Field order is the JSON key order: `directed`, `n`, `edges`, `source`,
/// `weight_model`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    /// Always `true`; readers treat a missing flag as directed.
    #[serde(default = "directed_by_default")]
    pub directed: bool,
    /// Node count; node ids are `0..n`.
    pub n: usize,
    /// Edges sorted by `(u, v, w)`.
    pub edges: Vec<Edge>,
    /// Designated start node for shortest-path queries.
    pub source: usize,
    /// Weight placement; always [`WeightModel::Edge`].
    #[serde(default)]
    pub weight_model: WeightModel,
}

const fn directed_by_default() -> bool {
    true
}

impl GraphPayload {
    /// Creates a directed payload, sorting `edges` by `(u, v, w)`.
    ///
    /// # Examples
    /// ```
    /// use digen_core::{Edge, GraphPayload};
    ///
    /// let payload = GraphPayload::new(3, vec![Edge::new(1, 2, 4), Edge::new(0, 1, 7)], 0);
    /// assert_eq!(payload.edges.first(), Some(&Edge::new(0, 1, 7)));
    /// assert!(payload.validate().is_ok());
    /// ```
    #[must_use]
    pub fn new(n: usize, mut edges: Vec<Edge>, source: usize) -> Self {
        edges.sort_unstable();
        Self {
            directed: true,
            n,
            edges,
            source,
            weight_model: WeightModel::Edge,
        }
    }

    /// Number of edges, `m` in the summary table.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks the structural guarantees every generated payload satisfies.
    ///
    /// # Errors
    /// Returns the first [`PayloadError`] found: an undirected flag, an
    /// endpoint outside `0..n`, a weight outside `1..=9`, a repeated
    /// `(u, v)` pair, edges out of `(u, v, w)` order, or a source outside
    /// `0..n`.
    pub fn validate(&self) -> Result<(), PayloadError> {
        if !self.directed {
            return Err(PayloadError::Undirected);
        }
        for &Edge { u, v, w } in &self.edges {
            if u >= self.n || v >= self.n {
                return Err(PayloadError::NodeOutOfBounds { u, v, n: self.n });
            }
            if !WEIGHT_RANGE.contains(&w) {
                return Err(PayloadError::WeightOutOfRange { u, v, w });
            }
        }
        for (index, pair) in self.edges.windows(2).enumerate() {
            let [previous, current] = pair else {
                continue;
            };
            if (previous.u, previous.v) == (current.u, current.v) {
                return Err(PayloadError::DuplicateEdge {
                    u: current.u,
                    v: current.v,
                });
            }
            if previous > current {
                return Err(PayloadError::UnsortedEdges { index: index + 1 });
            }
        }
        if self.source >= self.n {
            return Err(PayloadError::SourceOutOfBounds {
                node: self.source,
                n: self.n,
            });
        }
        Ok(())
    }
}
