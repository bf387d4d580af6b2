//! # Config Crate
//!
//! Centralized configuration constants for the building mesh generator.
//! Shape defaults, clamp bounds, output precision and tolerances are
//! defined here so the mesh library and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
//!
//! let requested = 50;
//! let sides = requested.clamp(MIN_SIDES, MAX_SIDES);
//! assert_eq!(sides, 36);
//! assert!((MIN_SIDES..=MAX_SIDES).contains(&DEFAULT_SIDES));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and small helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
