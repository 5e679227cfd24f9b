//! Infrastructure layer
//!
//! Platform directory lookup.

pub mod dirs;
