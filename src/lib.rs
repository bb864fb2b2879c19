//! Retrochar is a procedural retro character sprite compositor.
//!
//! It turns a [`CharacterDescription`] plus view parameters (direction, walk
//! phase, fidelity tier) into a 32x32 pixel-art sprite frame, rendered
//! entirely on the CPU with no asset files: every part is drawn
//! procedurally or stamped from in-crate bitmap stencils.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: clamp every style index of the description into its
//!    valid domain (untrusted saves never crash a render)
//! 2. **Resolve**: `(direction, species, phase) -> Motion + Anchors` (where
//!    every part goes this frame)
//! 3. **Draw**: part renderers paint onto a 4-layer [`Painter`] (shadow,
//!    back, body, front) in a fixed z-critical order
//! 4. **Flatten**: composite the layers bottom-to-top, post-process
//!    (species translucency, inner outline), mirror for the right-facing
//!    pose, flood the optional background
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a render is a pure function of its inputs; the same
//!   description and parameters always produce byte-identical pixels.
//! - **Tier-stable silhouette**: the fidelity tier changes fill colors
//!   only, never which pixels are covered.
//! - **No IO during rendering**: persistence and PNG export live at the
//!   boundary ([`save_file`], [`export_png`]) and never run inside a
//!   render call.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod character;
mod foundation;
mod io;
mod layout;
mod parts;
mod render;
mod surface;

pub use character::model::{CharacterDescription, FaceShape, Species, domain};
pub use character::palette;
pub use character::random::random_description;
pub use foundation::color::{Ramp, RampSpec, shade};
pub use foundation::core::{
    CANVAS, Direction, EXPORT_SIZE, FidelityTier, GRID, MARGIN, MIRROR_X, Rgb, Rgba, WalkPhase,
    mirror_x,
};
pub use foundation::error::{SpriteError, SpriteResult};
pub use io::export::{export_png, export_rgba};
pub use io::lang::{Language, label};
pub use io::save::{SaveData, decode, encode, load_file, save_file};
pub use layout::anchors::{
    Anchors, BlockAnchor, EyeAnchor, HandAnchor, LegAnchor, Motion, Point, View,
};
pub use render::compositor::render;
pub use render::frame::{RenderParams, SpriteFrame};
pub use surface::pixmap::{Layer, Painter, Pixmap};
pub use surface::stencil::{StampOpts, Stencil};
