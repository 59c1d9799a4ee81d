//! Prelude module for day_grid crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
