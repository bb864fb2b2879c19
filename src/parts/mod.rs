//! Procedural part renderers: body and head, monster parts, and equipment.
//!
//! Every function here draws one part onto a [`Painter`] using only the
//! rig's anchors for placement. Parts never talk to each other directly;
//! interaction rules (species overrides, helmet-vs-hair precedence,
//! equipment z-order) live in the conditionals at the top of each renderer
//! or in the compositor's call sequence.

pub mod body;
pub mod equipment;
pub mod monster;

use crate::character::model::{CharacterDescription, Species};
use crate::foundation::core::{Rgb, WalkPhase};
use crate::layout::anchors::{Anchors, Motion, View};

/// Fixed accent colors shared across parts (trim, gems, glass, shadow).
pub mod colors {
    use crate::foundation::core::{Rgb, Rgba};

    /// Gold trim (crowns, guards, monocle rims).
    pub const GOLD: Rgb = Rgb::new(0xf1, 0xc4, 0x0f);
    /// Silver studs.
    pub const SILVER: Rgb = Rgb::new(0x95, 0xa5, 0xa6);
    /// Weapon hafts and grips.
    pub const WOOD: Rgb = Rgb::new(0x8d, 0x55, 0x24);
    /// Ruby accents.
    pub const RED_GEM: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);
    /// Sapphire accents.
    pub const BLUE_GEM: Rgb = Rgb::new(0x34, 0x98, 0xdb);
    /// Plain white (sclera, bowstrings, horns).
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Frame color for dark eyewear.
    pub const DARK_GRAY: Rgb = Rgb::new(0x33, 0x33, 0x33);
    /// Dark slate used for visor slits and eye sockets.
    pub const SLATE: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
    /// Bone white for skeleton bodies.
    pub const BONE: Rgb = Rgb::new(0xec, 0xf0, 0xf1);
    /// Translucent blue lens glass.
    pub const GLASS: Rgba = Rgba::new(100, 200, 255, 128);
    /// Translucent red scouter lens.
    pub const GLASS_RED: Rgba = Rgba::new(255, 50, 50, 153);
    /// Translucent ground shadow.
    pub const GROUND_SHADOW: Rgba = Rgba::new(0, 0, 0, 51);
}

/// Everything a part renderer needs for one frame: the (normalized)
/// description, the resolved view/motion/anchors, and whether the frame
/// will be mirrored into a right-facing pose afterwards.
pub struct Rig<'a> {
    /// Normalized character description.
    pub desc: &'a CharacterDescription,
    /// Art pipeline for the requested direction.
    pub view: View,
    /// Requested walk phase.
    pub phase: WalkPhase,
    /// Animation offsets for the requested walk phase.
    pub motion: Motion,
    /// Resolved placement anchors.
    pub anchors: Anchors,
    /// Set when the side view will be mirrored into the right-facing pose;
    /// swaps which of weapon/shield is drawn behind the body.
    pub right_facing: bool,
}

impl Rig<'_> {
    /// The effective body color: skeletons are always bone white.
    pub fn body_color(&self) -> Rgb {
        if self.desc.species == Species::Skeleton {
            colors::BONE
        } else {
            self.desc.skin_color
        }
    }

    /// The effective hand/arm color: claws tint limbs with the horn color.
    pub fn hand_color(&self) -> Rgb {
        if self.desc.has_claws {
            self.desc.horn_color
        } else {
            self.body_color()
        }
    }
}

