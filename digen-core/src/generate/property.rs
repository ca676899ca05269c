//! Property suite for generated payloads.
//!
//! Builds arbitrary specs (1 to 50 nodes, any density, with or without
//! rings) and checks the guarantees every payload must satisfy regardless of
//! seed: valid bounds and weights, sorted edges, the acyclic/cyclic split,
//! a root-preferring source, and reproducibility.

use std::num::NonZeroUsize;

use digen_test_support::graph;
use proptest::prelude::*;

use super::generate_graph;
use crate::{
    density::Density,
    spec::{GraphSpec, Topology},
    test_utils::{edge_pairs, suite_proptest_config},
};

fn density_strategy() -> impl Strategy<Value = Density> {
    prop_oneof![
        Just(Density::Sparse),
        Just(Density::Medium),
        Just(Density::Dense)
    ]
}

fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![
        Just(Topology::Acyclic),
        (0_usize..=5).prop_map(|scc_hint| Topology::Cyclic { scc_hint }),
    ]
}

fn spec_strategy() -> impl Strategy<Value = GraphSpec> {
    (1_usize..=50, density_strategy(), topology_strategy()).prop_map(
        |(count, density, topology)| {
            let node_count = NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN);
            GraphSpec::new("arbitrary", node_count, density, topology)
        },
    )
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn payloads_are_structurally_valid(spec in spec_strategy(), seed in any::<u64>()) {
        let payload = generate_graph(&spec, seed);
        prop_assert_eq!(payload.n, spec.node_count().get());
        prop_assert_eq!(payload.validate(), Ok(()));

        let mut resorted = payload.edges.clone();
        resorted.sort();
        prop_assert_eq!(&resorted, &payload.edges);
        prop_assert!(payload.edge_count() >= payload.n - 1);
    }

    #[test]
    fn cycles_appear_only_when_rings_are_requested(
        spec in spec_strategy(),
        seed in any::<u64>(),
    ) {
        let payload = generate_graph(&spec, seed);
        let pairs = edge_pairs(&payload);
        let acyclic = graph::is_acyclic(payload.n, &pairs);
        let expects_cycle = spec.scc_hint() > 0 && payload.n >= 2;
        prop_assert_eq!(acyclic, !expects_cycle);

        if expects_cycle {
            let components = graph::strongly_connected_components(payload.n, &pairs);
            prop_assert!(components.iter().any(|component| component.len() > 1));
        }
    }

    #[test]
    fn source_is_a_root_whenever_one_exists(spec in spec_strategy(), seed in any::<u64>()) {
        let payload = generate_graph(&spec, seed);
        let degrees = graph::in_degrees(payload.n, &edge_pairs(&payload));
        prop_assert!(payload.source < payload.n);
        if degrees.contains(&0) {
            prop_assert_eq!(degrees.get(payload.source), Some(&0));
        }
    }

    #[test]
    fn generation_is_reproducible(spec in spec_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(generate_graph(&spec, seed), generate_graph(&spec, seed));
    }
}
