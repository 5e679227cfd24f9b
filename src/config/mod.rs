//! Configuration and constants
//!
//! - [`defaults`] - Default part labels, headings and file names

pub mod defaults;
