//! Proptest entry points for the MST properties.

use proptest::prelude::*;

use super::equivalence::run_equivalence_property;
use super::strategies::fixture_strategy;
use super::structural::run_structural_property;

proptest! {
    // Each case runs ten distributed cohorts on top of the sequential
    // baselines, so the case count stays deliberately modest.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn all_algorithms_agree_on_every_cohort_shape(fixture in fixture_strategy()) {
        run_equivalence_property(&fixture)?;
    }

    #[test]
    fn every_output_spans_the_graph(fixture in fixture_strategy()) {
        run_structural_property(&fixture)?;
    }
}
