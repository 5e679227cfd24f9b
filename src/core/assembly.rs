//! Client-side assembly flows
//!
//! Drives a [`StandardVeloBuilder`] either through the [`Director`] or with
//! direct step calls, and collects each finished product under a heading.

use std::cell::RefCell;

use serde::Serialize;

use crate::config::defaults::{CUSTOM_TITLE, FULL_TITLE, MINIMAL_TITLE};
use crate::core::builder::{PartStep, VeloBuilder};
use crate::core::director::{Director, Recipe};
use crate::core::product::Product;
use crate::core::standard::{PartLabels, StandardVeloBuilder};
use crate::error::DirectorError;

/// A finished product with the heading it is displayed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledVelo {
    /// Display heading
    pub title: String,
    /// The product itself
    #[serde(flatten)]
    pub product: Product,
}

impl AssembledVelo {
    fn new(title: &str, product: Product) -> Self {
        Self {
            title: title.to_string(),
            product,
        }
    }
}

/// Heading for a director recipe
pub fn recipe_title(recipe: Recipe) -> &'static str {
    match recipe {
        Recipe::Minimal => MINIMAL_TITLE,
        Recipe::Full => FULL_TITLE,
    }
}

/// Run one director recipe on a fresh builder
pub fn build_recipe(labels: PartLabels, recipe: Recipe) -> Result<AssembledVelo, DirectorError> {
    let builder = RefCell::new(StandardVeloBuilder::with_labels(labels));
    let mut director = Director::new();
    director.set_builder(&builder);

    director.build(recipe)?;
    let product = builder.borrow_mut().get_product();
    Ok(AssembledVelo::new(recipe_title(recipe), product))
}

/// Apply production steps directly, bypassing the director
pub fn assemble_steps(labels: PartLabels, steps: &[PartStep]) -> AssembledVelo {
    let mut builder = StandardVeloBuilder::with_labels(labels);
    for step in steps {
        builder.produce(*step);
    }
    tracing::info!("Assembled custom velo from {} step(s)", steps.len());
    AssembledVelo::new(CUSTOM_TITLE, builder.get_product())
}

/// The three usage modes, sharing one builder
///
/// Director minimal build, director full build, then guidon and roue called
/// directly on the builder.
pub fn demo(labels: PartLabels) -> Result<Vec<AssembledVelo>, DirectorError> {
    let builder = RefCell::new(StandardVeloBuilder::with_labels(labels));
    let mut director = Director::new();
    director.set_builder(&builder);

    let mut velos = Vec::with_capacity(3);

    director.build_minimal_viable_product()?;
    velos.push(AssembledVelo::new(
        MINIMAL_TITLE,
        builder.borrow_mut().get_product(),
    ));

    director.build_full_featured_product()?;
    velos.push(AssembledVelo::new(
        FULL_TITLE,
        builder.borrow_mut().get_product(),
    ));

    {
        let mut builder = builder.borrow_mut();
        builder.produce_guidon();
        builder.produce_roue();
        velos.push(AssembledVelo::new(CUSTOM_TITLE, builder.get_product()));
    }

    Ok(velos)
}
