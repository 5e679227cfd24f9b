//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::builder::PartStep;

    /// Generate a single production step
    pub fn part_step() -> impl Strategy<Value = PartStep> {
        prop_oneof![
            Just(PartStep::Guidon),
            Just(PartStep::Cadre),
            Just(PartStep::Roue),
        ]
    }

    /// Generate a sequence of production steps, possibly empty
    pub fn part_steps() -> impl Strategy<Value = Vec<PartStep>> {
        prop::collection::vec(part_step(), 0..20)
    }

    /// Generate a non-empty part label
    pub fn part_label() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 _-]{0,15}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::standard::{PartLabels, StandardVeloBuilder};
    use crate::core::builder::VeloBuilder;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_part_steps_generator_is_bounded(steps in part_steps()) {
            prop_assert!(steps.len() < 20);
        }

        #[test]
        fn test_custom_labels_appear_verbatim(
            guidon in part_label(),
            cadre in part_label(),
            roue in part_label(),
        ) {
            let labels = PartLabels { guidon: guidon.clone(), cadre: cadre.clone(), roue: roue.clone() };
            let mut builder = StandardVeloBuilder::with_labels(labels);
            builder.produce_guidon();
            builder.produce_cadre();
            builder.produce_roue();

            let product = builder.get_product();
            prop_assert_eq!(product.list(), &[guidon, cadre, roue][..]);
        }
    }
}
