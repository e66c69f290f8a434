//! Whole-song concerns: focus tracking, auto-scroll, and the breathing
//! indicator shown during instrumental gaps.

pub mod breathing;
pub mod focus;
pub mod scroll;
