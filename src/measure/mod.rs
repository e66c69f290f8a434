//! Text measurement: the measurer abstraction, script classification, and
//! per-syllable measurement with word grouping.

pub mod backend;
pub mod script;
pub mod syllable;
