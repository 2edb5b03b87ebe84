//! # Config Crate
//!
//! Centralized configuration constants for the prism-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BASE_EPSILON, DEGENERATE_POINT_FACTOR};
//!
//! // Adjacent boundary points closer than this collapse into one
//! let threshold = DEGENERATE_POINT_FACTOR * BASE_EPSILON;
//! assert_eq!(threshold, 0.1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
