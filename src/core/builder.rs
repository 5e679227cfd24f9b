//! Builder capability
//!
//! [`VeloBuilder`] declares the production steps a velo goes through.
//! Implementations own their in-progress product; the trait itself carries
//! no state and imposes no ordering between steps.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Production steps of a velo builder
///
/// Each call appends exactly one part label to the builder's current
/// product. Steps may run in any order and any number of times.
pub trait VeloBuilder {
    /// Produce the guidon (handlebar)
    fn produce_guidon(&mut self);

    /// Produce the cadre (frame)
    fn produce_cadre(&mut self);

    /// Produce the roue (wheel)
    fn produce_roue(&mut self);

    /// Run the production step named by `step`
    fn produce(&mut self, step: PartStep) {
        match step {
            PartStep::Guidon => self.produce_guidon(),
            PartStep::Cadre => self.produce_cadre(),
            PartStep::Roue => self.produce_roue(),
        }
    }
}

/// A single production step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartStep {
    Guidon,
    Cadre,
    Roue,
}

impl PartStep {
    /// Accepted step names
    pub const NAMES: &'static [&'static str] = &["guidon", "cadre", "roue"];

    /// Lowercase step name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guidon => "guidon",
            Self::Cadre => "cadre",
            Self::Roue => "roue",
        }
    }
}

impl fmt::Display for PartStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartStep {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guidon" => Ok(Self::Guidon),
            "cadre" => Ok(Self::Cadre),
            "roue" => Ok(Self::Roue),
            _ => Err(ParseError::UnknownStep {
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
