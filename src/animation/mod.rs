//! Easing and shaping curves used by the reveal, emphasis, and breathing
//! animations.

pub mod curve;
pub mod ease;
