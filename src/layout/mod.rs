//! Line breaking, absolute positioning, and the per-line layout cache.

pub mod breaker;
pub mod cache;
pub mod positioner;
