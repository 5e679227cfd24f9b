//! Standard velo builder
//!
//! The concrete [`VeloBuilder`] used by the CLI. It owns exactly one
//! in-progress [`Product`] and hands it over on [`StandardVeloBuilder::get_product`],
//! starting a fresh build cycle in its place.

use serde::Deserialize;

use crate::config::defaults::{CADRE_LABEL, GUIDON_LABEL, ROUE_LABEL};
use crate::core::builder::VeloBuilder;
use crate::core::product::Product;

/// Labels appended by each production step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartLabels {
    /// Label for the guidon step
    pub guidon: String,
    /// Label for the cadre step
    pub cadre: String,
    /// Label for the roue step
    pub roue: String,
}

impl Default for PartLabels {
    fn default() -> Self {
        Self {
            guidon: GUIDON_LABEL.to_string(),
            cadre: CADRE_LABEL.to_string(),
            roue: ROUE_LABEL.to_string(),
        }
    }
}

/// Builder producing velos from a fixed set of part labels
#[derive(Debug, Default)]
pub struct StandardVeloBuilder {
    labels: PartLabels,
    product: Product,
}

impl StandardVeloBuilder {
    /// Create a builder with the default labels and an empty product
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom labels
    pub fn with_labels(labels: PartLabels) -> Self {
        Self {
            labels,
            product: Product::new(),
        }
    }

    /// Discard the current product and start a new build cycle
    pub fn reset(&mut self) {
        self.product = Product::new();
    }

    /// Hand over the finished product and start a new build cycle
    ///
    /// Never fails: with no production steps since the last reset, the
    /// returned product is empty.
    pub fn get_product(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        tracing::debug!("Retrieved product with {} part(s)", product.len());
        product
    }

    fn append(&mut self, step: &'static str, label: String) {
        tracing::debug!("Producing {step}: {label}");
        self.product.append(label);
    }
}

impl VeloBuilder for StandardVeloBuilder {
    fn produce_guidon(&mut self) {
        let label = self.labels.guidon.clone();
        self.append("guidon", label);
    }

    fn produce_cadre(&mut self) {
        let label = self.labels.cadre.clone();
        self.append("cadre", label);
    }

    fn produce_roue(&mut self) {
        let label = self.labels.roue.clone();
        self.append("roue", label);
    }
}
