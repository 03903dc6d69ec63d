//! # Config Crate
//!
//! Centralized configuration constants for the lens boxing workspace.
//! Sample counts, label placement offsets and the command identity used by
//! the add-in shim are defined here so the geometry crate never scatters
//! literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BoxingConfig, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
//!
//! let cfg = BoxingConfig::default();
//! assert_eq!(cfg.sample_count, DEFAULT_SAMPLE_COUNT);
//! assert!(BoxingConfig::new(MAX_SAMPLE_COUNT + 1, 0.5).is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No values tied to a particular CAD product's units
//! - **Validated**: Runtime configuration is checked on construction

pub mod constants;
