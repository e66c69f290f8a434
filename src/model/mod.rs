//! Input data model: syllables, lines, and line metadata.

pub mod line;
