//! The character description data model, curated palettes, and the
//! random-character generator.

pub mod model;
pub mod palette;
pub mod random;
