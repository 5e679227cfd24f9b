//! Velo - the Builder pattern, one part at a time
//!
//! A builder assembles a velo from parts through discrete production steps,
//! optionally driven by a director that knows a few fixed sequences.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Product, builder trait, concrete builder, director
//! - [`infra`] - Platform directories
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use velo::core::{Director, StandardVeloBuilder};
//!
//! let builder = RefCell::new(StandardVeloBuilder::new());
//! let mut director = Director::new();
//! director.set_builder(&builder);
//! director.build_full_featured_product().unwrap();
//!
//! let product = builder.borrow_mut().get_product();
//! assert_eq!(product.list(), ["PartA1", "PartB1", "PartC1"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
