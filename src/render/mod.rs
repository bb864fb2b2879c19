//! The compositor and its output frame type.

pub mod compositor;
pub mod frame;
