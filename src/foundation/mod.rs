//! Shared primitives: time, color, direction, geometry, errors.

pub mod core;
pub mod error;
