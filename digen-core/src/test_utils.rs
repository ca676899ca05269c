//! Shared test utilities for `digen-core`.

use digen_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::payload::GraphPayload;

/// Builds a proptest configuration from the shared run profile so every
/// suite honours `PROGTEST_CASES` and `DIGEN_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Strips weights so payload edges can be fed to the reference checks.
#[must_use]
pub(crate) fn edge_pairs(payload: &GraphPayload) -> Vec<(usize, usize)> {
    payload.edges.iter().map(|edge| (edge.u, edge.v)).collect()
}
