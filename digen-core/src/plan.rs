//! Dataset planning: which nine graphs to build.

use std::{fmt, num::NonZeroUsize, ops::RangeInclusive};

use rand::Rng;

use crate::{
    density::Density,
    spec::{GraphSpec, Topology},
};

/// Size class of a planned dataset.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SizeTier {
    /// 6 to 10 nodes.
    Small,
    /// 10 to 20 nodes.
    Medium,
    /// 20 to 50 nodes.
    Large,
}

impl SizeTier {
    /// All tiers in planning order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Inclusive node-count range sampled for the tier.
    #[must_use]
    pub const fn node_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Small => 6..=10,
            Self::Medium => 10..=20,
            Self::Large => 20..=50,
        }
    }

    /// Lower-case label used as the dataset name prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn sample_node_count<R: Rng + ?Sized>(self, rng: &mut R) -> NonZeroUsize {
        // Tier ranges never include zero.
        NonZeroUsize::new(rng.gen_range(self.node_range())).unwrap_or(NonZeroUsize::MIN)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed slot in the plan; only the node count is random.
struct PlanSlot {
    tier: SizeTier,
    density: Density,
    topology: Topology,
}

const fn slot(tier: SizeTier, density: Density, topology: Topology) -> PlanSlot {
    PlanSlot {
        tier,
        density,
        topology,
    }
}

const fn cyclic(scc_hint: usize) -> Topology {
    Topology::Cyclic { scc_hint }
}

const SLOTS_PER_TIER: usize = 3;

const PLAN: [PlanSlot; 9] = [
    slot(SizeTier::Small, Density::Sparse, Topology::Acyclic),
    slot(SizeTier::Small, Density::Medium, cyclic(1)),
    slot(SizeTier::Small, Density::Dense, cyclic(2)),
    slot(SizeTier::Medium, Density::Medium, Topology::Acyclic),
    slot(SizeTier::Medium, Density::Sparse, cyclic(2)),
    slot(SizeTier::Medium, Density::Dense, cyclic(3)),
    slot(SizeTier::Large, Density::Dense, Topology::Acyclic),
    slot(SizeTier::Large, Density::Medium, cyclic(4)),
    slot(SizeTier::Large, Density::Dense, cyclic(5)),
];

/// Plans the nine datasets.
///
/// Draws three node counts per tier (small, then medium, then large) from
/// `rng`, then pairs them with the fixed density and topology assignment.
/// Each tier holds one DAG and two cyclic graphs with increasing ring counts.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use digen_core::plan_specs;
///
/// let specs = plan_specs(&mut StdRng::seed_from_u64(1));
/// assert_eq!(specs.len(), 9);
/// assert_eq!(specs.first().map(|spec| spec.name()), Some("small-1-dag-sparse"));
/// ```
pub fn plan_specs<R: Rng + ?Sized>(rng: &mut R) -> Vec<GraphSpec> {
    let mut node_counts = Vec::with_capacity(PLAN.len());
    for tier in SizeTier::ALL {
        for _ in 0..SLOTS_PER_TIER {
            node_counts.push(tier.sample_node_count(rng));
        }
    }

    PLAN.iter()
        .zip(node_counts)
        .enumerate()
        .map(|(index, (slot, node_count))| {
            let ordinal = index % SLOTS_PER_TIER + 1;
            let kind = match slot.topology {
                Topology::Acyclic => "dag",
                Topology::Cyclic { .. } => "cyclic",
            };
            let name = format!("{}-{ordinal}-{kind}-{}", slot.tier, slot.density);
            GraphSpec::new(name, node_count, slot.density, slot.topology)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    fn planned(seed: u64) -> Vec<GraphSpec> {
        plan_specs(&mut StdRng::seed_from_u64(seed))
    }

    #[rstest]
    #[case(0, "small-1-dag-sparse", Density::Sparse, Topology::Acyclic)]
    #[case(1, "small-2-cyclic-medium", Density::Medium, cyclic(1))]
    #[case(2, "small-3-cyclic-dense", Density::Dense, cyclic(2))]
    #[case(3, "medium-1-dag-medium", Density::Medium, Topology::Acyclic)]
    #[case(4, "medium-2-cyclic-sparse", Density::Sparse, cyclic(2))]
    #[case(5, "medium-3-cyclic-dense", Density::Dense, cyclic(3))]
    #[case(6, "large-1-dag-dense", Density::Dense, Topology::Acyclic)]
    #[case(7, "large-2-cyclic-medium", Density::Medium, cyclic(4))]
    #[case(8, "large-3-cyclic-dense", Density::Dense, cyclic(5))]
    fn plan_assigns_fixed_names_and_shapes(
        #[case] index: usize,
        #[case] name: &str,
        #[case] density: Density,
        #[case] topology: Topology,
    ) {
        let specs = planned(20_251_103);
        let spec = specs.get(index).expect("plan must have nine entries");
        assert_eq!(spec.name(), name);
        assert_eq!(spec.density(), density);
        assert_eq!(spec.topology(), topology);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(20_251_103)]
    fn node_counts_stay_within_tier_ranges(#[case] seed: u64) {
        let specs = planned(seed);
        assert_eq!(specs.len(), 9);
        for (spec, tier) in specs.iter().zip(
            SizeTier::ALL
                .iter()
                .flat_map(|tier| std::iter::repeat_n(*tier, SLOTS_PER_TIER)),
        ) {
            assert!(
                tier.node_range().contains(&spec.node_count().get()),
                "{} has {} nodes",
                spec.name(),
                spec.node_count()
            );
        }
    }

    #[test]
    fn each_tier_has_one_dag_and_two_cyclic_specs() {
        let specs = planned(3);
        for chunk in specs.chunks(SLOTS_PER_TIER) {
            let dags = chunk.iter().filter(|spec| !spec.is_cyclic()).count();
            assert_eq!(dags, 1);
            let hints: Vec<usize> = chunk.iter().map(GraphSpec::scc_hint).collect();
            assert!(hints.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn planning_is_deterministic_for_a_seed() {
        assert_eq!(planned(99), planned(99));
    }
}
