//! The velo under construction
//!
//! A product is nothing more than the ordered list of part labels its
//! builder has produced so far.

use std::fmt;

use serde::Serialize;

/// A velo assembled from part labels
///
/// Parts are kept in the order the production steps ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Part labels in production order
    parts: Vec<String>,
}

impl Product {
    /// Create an empty product
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part label
    pub fn append(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Part labels in insertion order
    pub fn list(&self) -> &[String] {
        &self.parts
    }

    /// Number of parts produced
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no part has been produced yet
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join(", "))
    }
}
