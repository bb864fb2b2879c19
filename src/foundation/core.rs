use crate::foundation::error::{SpriteError, SpriteResult};

/// Logical pixel grid width/height of the character rig.
pub const GRID: i32 = 32;

/// Fixed overdraw margin applied on every side of the logical grid.
///
/// Part renderers may draw slightly outside `0..GRID` (helmet brims, wing
/// tips); the margin makes that overdraw land harmlessly inside the buffer.
pub const MARGIN: i32 = 8;

/// Physical buffer width/height: logical grid plus margins.
pub const CANVAS: i32 = GRID + 2 * MARGIN;

/// Horizontal mirror axis of the logical grid: `mirrored_x = MIRROR_X - x`.
pub const MIRROR_X: i32 = GRID - 1;

/// Fixed export resolution (square), independent of the live display scale.
pub const EXPORT_SIZE: u32 = 480;

/// Mirror a logical x coordinate about the grid's vertical center.
pub fn mirror_x(x: i32) -> i32 {
    MIRROR_X - x
}

/// Facing direction of the rendered character.
///
/// `Right` is not distinct art: it renders the `Left` pipeline (with the
/// documented weapon/shield z-order swap) and mirrors the flattened buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Facing the viewer.
    #[default]
    Front,
    /// Facing the viewer's left.
    Left,
    /// Facing the viewer's right (buffer-level mirror of `Left`).
    Right,
    /// Facing away from the viewer.
    Back,
}

impl Direction {
    /// Whether this direction renders through the side-view pipeline.
    pub fn is_side(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Two-phase walk/idle animation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkPhase {
    /// Frame 0.
    #[default]
    Contact,
    /// Frame 1.
    Passing,
}

impl WalkPhase {
    /// 0 for [`WalkPhase::Contact`], 1 for [`WalkPhase::Passing`].
    pub fn index(self) -> i32 {
        match self {
            WalkPhase::Contact => 0,
            WalkPhase::Passing => 1,
        }
    }
}

/// Rendering-fidelity tier ("8/16/32-bit" in the UI).
///
/// A tier only changes how filled regions are shaded and whether the
/// antialiasing/outline post-processes run. It never moves a single part:
/// the alpha mask of a render is identical across all three tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FidelityTier {
    /// Flat single-color fills.
    Flat,
    /// Banded light edges plus checkerboard-dithered shadow edges.
    #[default]
    Dithered,
    /// 4-stop banded gradients and soft corner antialiasing.
    Gradient,
}

/// An opaque sRGB color as stored in a character description.
///
/// Serializes as a `#rrggbb` hex string for save-data compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(s: &str) -> SpriteResult<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        if t.len() != 6 {
            return Err(SpriteError::validation(format!(
                "color must be #rrggbb, got \"{s}\""
            )));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&t[range], 16)
                .map_err(|_| SpriteError::validation(format!("invalid hex color \"{s}\"")))
        };
        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lift into a fully opaque paint color.
    pub const fn opaque(self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }

    /// Lift into a paint color with the given alpha.
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Straight-alpha RGBA8 paint/output color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Straight (non-premultiplied) alpha.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Build an opaque paint color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a paint color with explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this color contributes nothing when blended.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// The opaque base of this paint, dropping alpha.
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Source-over blend `self` on top of `dst` (straight alpha, rounded
    /// integer arithmetic, deterministic).
    pub fn over(self, dst: Rgba) -> Rgba {
        if self.a == 255 || dst.a == 0 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = u32::from(self.a);
        let da = u32::from(dst.a);
        // out_a = sa + da * (255 - sa) / 255, all in 0..=255 fixed point.
        let inv = 255 - sa;
        let out_a = sa * 255 + da * inv;
        if out_a == 0 {
            return Rgba::TRANSPARENT;
        }
        let ch = |s: u8, d: u8| {
            let s = u32::from(s);
            let d = u32::from(d);
            let num = s * sa * 255 + d * da * inv;
            ((num + out_a / 2) / out_a) as u8
        };
        Rgba {
            r: ch(self.r, dst.r),
            g: ch(self.g, dst.g),
            b: ch(self.b, dst.b),
            a: ((out_a + 127) / 255) as u8,
        }
    }

    /// Scale the alpha channel by `factor` in `[0, 1]`.
    pub fn alpha_scaled(self, factor: f32) -> Rgba {
        let a = (f32::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Rgba { a, ..self }
    }
}

/// Clamp an integer into an inclusive range (anchor/coordinate hygiene).
pub fn clamp_i32(v: i32, lo: i32, hi: i32) -> i32 {
    v.max(lo).min(hi)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
