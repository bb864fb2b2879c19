//! The pixel surface abstraction: layered RGBA pixmaps, the tier-aware
//! painter, and bitmap stencil stamping.

pub mod pixmap;
pub mod stencil;
