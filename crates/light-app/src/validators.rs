//! Route parameter guards.
//!
//! Handlers call these before any fetch; a failure aborts the pipeline.

pub use light_core::{validate_address, ValidationError};
