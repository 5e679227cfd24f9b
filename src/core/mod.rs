//! Core business logic module
//!
//! This module contains the builder pattern itself and the flows that use it.
//! File access is limited to [`config`], which reads the optional config file.
//!
//! # Submodules
//!
//! - [`product`] - The velo under construction
//! - [`builder`] - Builder capability and production steps
//! - [`standard`] - Standard concrete builder
//! - [`director`] - Canned build sequences
//! - [`assembly`] - Client flows driving builder and director
//! - [`config`] - Configuration file handling

pub mod assembly;
pub mod builder;
pub mod config;
pub mod director;
pub mod product;
pub mod standard;

pub use builder::{PartStep, VeloBuilder};
pub use director::{Director, Recipe};
pub use product::Product;
pub use standard::{PartLabels, StandardVeloBuilder};
