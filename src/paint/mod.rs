//! Frame sampling: reveal gradients, per-character emphasis, and row paint
//! assembly.

pub mod emphasis;
pub mod plan;
pub mod reveal;
