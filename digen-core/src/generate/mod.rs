//! Random graph construction.
//!
//! A graph starts as an acyclic backbone sampled over a random topological
//! order, optionally gains small rings, and then receives weights and a
//! source node. Every step draws from the generator passed in by the caller,
//! so a fixed seed always reproduces the same payload.

use std::{collections::BTreeSet, num::NonZeroUsize, ops::RangeInclusive};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    density::Density,
    payload::{Edge, GraphPayload},
    spec::GraphSpec,
};

/// Inclusive range every edge weight is drawn from.
pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=9;

/// Ring sizes drawn for each injected cycle, before clipping to `n`.
const RING_WIDTH: RangeInclusive<usize> = 3..=5;
/// Rings this wide or wider may receive an extra chord.
const CHORD_MIN_WIDTH: usize = 4;
const CHORD_PROBABILITY: f64 = 0.6;

/// Unweighted edges keyed by `(u, v)`; inserting a present pair is a no-op.
pub type EdgeSet = BTreeSet<(usize, usize)>;

/// Acyclic edge skeleton together with the order it respects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Backbone {
    /// Random topological order; every backbone edge points forward in it.
    pub order: Vec<usize>,
    /// Sampled forward edges plus the consecutive chain.
    pub edges: EdgeSet,
}

/// Samples an acyclic backbone over a random permutation of `0..n`.
///
/// Each forward pair `order[i] -> order[j]` (`i < j`) is kept with the
/// density's probability, then every consecutive pair `order[i] ->
/// order[i + 1]` is forced in so the undirected skeleton is connected.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use rand::{SeedableRng, rngs::StdRng};
/// use digen_core::{Density, backbone_edges};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let nodes = NonZeroUsize::new(6).expect("six is non-zero");
/// let backbone = backbone_edges(nodes, Density::Sparse, &mut rng);
/// assert_eq!(backbone.order.len(), 6);
/// assert!(backbone.edges.len() >= 5);
/// ```
pub fn backbone_edges<R: Rng + ?Sized>(
    node_count: NonZeroUsize,
    density: Density,
    rng: &mut R,
) -> Backbone {
    let mut order: Vec<usize> = (0..node_count.get()).collect();
    order.shuffle(rng);

    let probability = density.probability();
    let mut edges = EdgeSet::new();
    for (position, &from) in order.iter().enumerate() {
        for &to in order.iter().skip(position + 1) {
            if rng.gen_bool(probability) {
                edges.insert((from, to));
            }
        }
    }
    for pair in order.windows(2) {
        if let [from, to] = pair {
            edges.insert((*from, *to));
        }
    }
    Backbone { order, edges }
}

/// Injects `rings` small cycles into `edges`.
///
/// Each round picks a window of 3 to 5 consecutive positions of `order`
/// (clipped to the node count), shuffles the nodes found there and links
/// them into a ring. Rings of four or more nodes gain one random chord with
/// probability 0.6. A single-node window adds nothing.
pub fn inject_cycles<R: Rng + ?Sized>(
    edges: &mut EdgeSet,
    order: &[usize],
    rings: usize,
    rng: &mut R,
) {
    let node_count = order.len();
    if node_count == 0 {
        return;
    }
    for round in 0..rings {
        let width = node_count.min(rng.gen_range(RING_WIDTH));
        let start = rng.gen_range(0..=node_count - width);
        let mut ring: Vec<usize> = order.iter().skip(start).take(width).copied().collect();
        ring.shuffle(rng);
        close_ring(edges, &ring);

        let mut chord = None;
        if ring.len() >= CHORD_MIN_WIDTH && rng.gen_bool(CHORD_PROBABILITY) {
            let picked: Vec<usize> = ring.choose_multiple(rng, 2).copied().collect();
            if let [from, to] = picked.as_slice() {
                edges.insert((*from, *to));
                chord = Some((*from, *to));
            }
        }
        debug!(round, width, start, ?ring, ?chord, "injected ring");
    }
}

fn close_ring(edges: &mut EdgeSet, ring: &[usize]) {
    for (from, to) in ring.iter().zip(ring.iter().cycle().skip(1)) {
        if from != to {
            edges.insert((*from, *to));
        }
    }
}

/// Draws an independent weight from [`WEIGHT_RANGE`] for every edge.
///
/// Weights are drawn in ascending `(u, v)` order, the iteration order of
/// [`EdgeSet`].
pub fn assign_weights<R: Rng + ?Sized>(edges: &EdgeSet, rng: &mut R) -> Vec<Edge> {
    edges
        .iter()
        .map(|&(u, v)| Edge::new(u, v, rng.gen_range(WEIGHT_RANGE)))
        .collect()
}

/// Picks the payload's source node.
///
/// Chooses uniformly among nodes with in-degree zero, or uniformly among all
/// nodes when every node has an incoming edge.
pub fn select_source<R: Rng + ?Sized>(
    node_count: NonZeroUsize,
    edges: &[Edge],
    rng: &mut R,
) -> usize {
    let mut in_degree = vec![0_usize; node_count.get()];
    for edge in edges {
        if let Some(degree) = in_degree.get_mut(edge.v) {
            *degree += 1;
        }
    }
    let roots: Vec<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node, _)| node)
        .collect();
    match roots.choose(rng) {
        Some(&root) => root,
        None => rng.gen_range(0..node_count.get()),
    }
}

/// Builds the payload for `spec` from a generator seeded with `seed`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use digen_core::{Density, GraphSpec, Topology, generate_graph};
///
/// let nodes = NonZeroUsize::new(10).expect("ten is non-zero");
/// let spec = GraphSpec::new("demo", nodes, Density::Medium, Topology::Acyclic);
/// let first = generate_graph(&spec, 42);
/// let second = generate_graph(&spec, 42);
/// assert_eq!(first, second);
/// assert!(first.validate().is_ok());
/// ```
#[must_use]
#[instrument(
    name = "core.generate_graph",
    skip(spec),
    fields(
        dataset = %spec.name(),
        nodes = spec.node_count().get(),
        density = %spec.density(),
        scc_hint = spec.scc_hint(),
    ),
)]
pub fn generate_graph(spec: &GraphSpec, seed: u64) -> GraphPayload {
    let mut rng = StdRng::seed_from_u64(seed);
    let Backbone { order, mut edges } = backbone_edges(spec.node_count(), spec.density(), &mut rng);
    if spec.is_cyclic() {
        inject_cycles(&mut edges, &order, spec.scc_hint(), &mut rng);
    }
    let weighted = assign_weights(&edges, &mut rng);
    let source = select_source(spec.node_count(), &weighted, &mut rng);
    debug!(edges = weighted.len(), source, "graph generated");
    GraphPayload::new(spec.node_count().get(), weighted, source)
}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
