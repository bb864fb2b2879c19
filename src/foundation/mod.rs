//! Core value types, the color ramp utility, and the error taxonomy.

pub mod color;
pub mod core;
pub mod error;
