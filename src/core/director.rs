//! Director: canned build sequences
//!
//! The director borrows a builder and drives its production steps in a
//! fixed order. It never owns the builder, so the caller keeps the builder
//! around to collect the finished product.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::core::builder::VeloBuilder;
use crate::error::{DirectorError, ParseError};

/// Named director sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Cadre only
    Minimal,
    /// Guidon, cadre, roue
    Full,
}

impl Recipe {
    /// Accepted recipe names
    pub const NAMES: &'static [&'static str] = &["minimal", "full"];

    /// Lowercase recipe name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recipe {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            _ => Err(ParseError::UnknownRecipe {
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// Drives a borrowed builder through predefined sequences
#[derive(Default)]
pub struct Director<'a> {
    builder: Option<&'a RefCell<dyn VeloBuilder + 'a>>,
}

impl<'a> Director<'a> {
    /// Create a director with no builder assigned
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Assign the builder to drive, replacing any previous one
    pub fn set_builder(&mut self, builder: &'a RefCell<dyn VeloBuilder + 'a>) {
        self.builder = Some(builder);
    }

    /// Whether a builder has been assigned
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Produce the cadre only
    pub fn build_minimal_viable_product(&self) -> Result<(), DirectorError> {
        tracing::info!("Director: building minimal viable product");
        let mut builder = self.builder()?;
        builder.produce_cadre();
        Ok(())
    }

    /// Produce guidon, cadre and roue, in that order
    pub fn build_full_featured_product(&self) -> Result<(), DirectorError> {
        tracing::info!("Director: building full featured product");
        let mut builder = self.builder()?;
        builder.produce_guidon();
        builder.produce_cadre();
        builder.produce_roue();
        Ok(())
    }

    /// Run the sequence named by `recipe`
    pub fn build(&self, recipe: Recipe) -> Result<(), DirectorError> {
        match recipe {
            Recipe::Minimal => self.build_minimal_viable_product(),
            Recipe::Full => self.build_full_featured_product(),
        }
    }

    fn builder(&self) -> Result<std::cell::RefMut<'a, dyn VeloBuilder + 'a>, DirectorError> {
        let cell = self.builder.ok_or(DirectorError::NoBuilder)?;
        cell.try_borrow_mut().map_err(|_| DirectorError::BuilderBusy)
    }
}

impl fmt::Debug for Director<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("has_builder", &self.has_builder())
            .finish()
    }
}
