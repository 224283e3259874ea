//! Common utilities for the boxlens inspector.
//!
//! This crate provides shared infrastructure used by all inspector components:
//! - **Warning System** - deduplicated warnings for malformed style input

/// Deduplicated warnings.
pub mod warning;
