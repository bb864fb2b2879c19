//! Curated color swatches offered by UI collaborators and sampled by the
//! randomizer. The data model itself accepts any RGB value; these lists are
//! presentation defaults, not constraints.

use crate::foundation::core::Rgb;

/// Skin tones, light to dark, plus a few fantasy hues.
pub const SKIN: &[Rgb] = &[
    Rgb::new(0xff, 0xdb, 0xac),
    Rgb::new(0xf1, 0xc2, 0x7d),
    Rgb::new(0xe0, 0xac, 0x69),
    Rgb::new(0xc6, 0x86, 0x42),
    Rgb::new(0x8d, 0x55, 0x24),
    Rgb::new(0x5d, 0x40, 0x37),
    Rgb::new(0x95, 0xd5, 0xb2),
    Rgb::new(0xa2, 0x9b, 0xfe),
    Rgb::new(0xdf, 0xe6, 0xe9),
];

/// Hair colors.
pub const HAIR: &[Rgb] = &[
    Rgb::new(0x2c, 0x3e, 0x50),
    Rgb::new(0x5d, 0x40, 0x37),
    Rgb::new(0xe7, 0x4c, 0x3c),
    Rgb::new(0xf1, 0xc4, 0x0f),
    Rgb::new(0xe6, 0x7e, 0x22),
    Rgb::new(0x9b, 0x59, 0xb6),
    Rgb::new(0x34, 0x98, 0xdb),
    Rgb::new(0x2e, 0xcc, 0x71),
    Rgb::new(0xec, 0xf0, 0xf1),
    Rgb::new(0xfd, 0x79, 0xa8),
];

/// Iris colors.
pub const EYES: &[Rgb] = &[
    Rgb::new(0x2c, 0x3e, 0x50),
    Rgb::new(0x5d, 0x40, 0x37),
    Rgb::new(0x34, 0x98, 0xdb),
    Rgb::new(0x27, 0xae, 0x60),
    Rgb::new(0x8e, 0x44, 0xad),
    Rgb::new(0xc0, 0x39, 0x2b),
    Rgb::new(0xf3, 0x9c, 0x12),
];

/// Garment colors shared by the chest, waist, and leg slots.
pub const OUTFIT: &[Rgb] = &[
    Rgb::new(0x34, 0x98, 0xdb),
    Rgb::new(0xe7, 0x4c, 0x3c),
    Rgb::new(0x2e, 0xcc, 0x71),
    Rgb::new(0xf1, 0xc4, 0x0f),
    Rgb::new(0x9b, 0x59, 0xb6),
    Rgb::new(0xe6, 0x7e, 0x22),
    Rgb::new(0x2c, 0x3e, 0x50),
    Rgb::new(0x7f, 0x8c, 0x8d),
    Rgb::new(0xec, 0xf0, 0xf1),
    Rgb::new(0x16, 0xa0, 0x85),
];

/// Shoe leathers and fabrics.
pub const SHOES: &[Rgb] = &[
    Rgb::new(0x5d, 0x40, 0x37),
    Rgb::new(0x2c, 0x3e, 0x50),
    Rgb::new(0x7f, 0x8c, 0x8d),
    Rgb::new(0xc0, 0x39, 0x2b),
    Rgb::new(0xec, 0xf0, 0xf1),
];

/// Monster-part colors (horns, wings, tails).
pub const MONSTER: &[Rgb] = &[
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0xa2, 0x9b, 0xfe),
    Rgb::new(0xe7, 0x4c, 0x3c),
    Rgb::new(0x2c, 0x3e, 0x50),
    Rgb::new(0x6c, 0x5c, 0xe7),
    Rgb::new(0x00, 0xb8, 0x94),
    Rgb::new(0xfd, 0x79, 0xa8),
    Rgb::new(0x63, 0x6e, 0x72),
];

/// Metals for helmets, weapons, and shields.
pub const METAL: &[Rgb] = &[
    Rgb::new(0xbd, 0xc3, 0xc7),
    Rgb::new(0x7f, 0x8c, 0x8d),
    Rgb::new(0xf1, 0xc4, 0x0f),
    Rgb::new(0xe6, 0x7e, 0x22),
    Rgb::new(0x2c, 0x3e, 0x50),
];

#[cfg(test)]
#[path = "../../tests/unit/character/palette.rs"]
mod tests;
