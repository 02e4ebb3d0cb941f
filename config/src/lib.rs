//! # Config Crate
//!
//! Centralized configuration constants for the disc mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DISC_SEGMENTS, MAX_DISC_SEGMENTS, MIN_DISC_SEGMENTS, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Default tessellation sits inside the accepted segment range
//! assert!((MIN_DISC_SEGMENTS..=MAX_DISC_SEGMENTS).contains(&DEFAULT_DISC_SEGMENTS));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer-Agnostic**: No graphics API specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
