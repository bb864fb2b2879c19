use crate::foundation::core::{CANVAS, Direction, FidelityTier, MARGIN, Rgb, Rgba, WalkPhase};
use crate::surface::pixmap::Pixmap;

/// View parameters for one render: everything besides the character itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderParams {
    /// Facing direction.
    pub direction: Direction,
    /// Walk/idle animation phase.
    pub phase: WalkPhase,
    /// Shading fidelity tier.
    pub tier: FidelityTier,
    /// Optional opaque background flood fill; `None` keeps transparency.
    pub background: Option<Rgb>,
}

/// A finished, flattened sprite frame.
///
/// The buffer is the full physical canvas (logical grid plus margins), so
/// overdraw like helmet brims and wing tips is included. Pixel access here
/// is in physical coordinates, `0..CANVAS` on both axes.
#[derive(Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    pixmap: Pixmap,
}

impl SpriteFrame {
    pub(crate) fn new(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// Canvas width/height in physical pixels.
    pub const fn size() -> u32 {
        CANVAS as u32
    }

    /// The pixel at physical `(x, y)`; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixmap.get(x as i32 - MARGIN, y as i32 - MARGIN)
    }

    /// The pixel at logical grid coordinates (margins addressable with
    /// negative/overflow values).
    pub fn logical_pixel(&self, x: i32, y: i32) -> Rgba {
        self.pixmap.get(x, y)
    }

    /// Count of non-transparent pixels.
    pub fn opaque_pixel_count(&self) -> usize {
        self.pixmap.rows().flatten().filter(|p| p.a != 0).count()
    }

    /// The alpha mask: one bool per physical pixel, row-major.
    pub fn alpha_mask(&self) -> Vec<bool> {
        self.pixmap.rows().flatten().map(|p| p.a != 0).collect()
    }

    /// A horizontally mirrored copy.
    pub fn mirrored(&self) -> SpriteFrame {
        let mut pm = self.pixmap.clone();
        pm.mirror_horizontal();
        SpriteFrame::new(pm)
    }

    /// Tight bounding box of non-transparent pixels as physical
    /// `(min_x, min_y, max_x, max_y)`, or `None` for an empty frame.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bb: Option<(u32, u32, u32, u32)> = None;
        for (y, row) in self.pixmap.rows().enumerate() {
            for (x, px) in row.iter().enumerate() {
                if px.a != 0 {
                    let (x, y) = (x as u32, y as u32);
                    bb = Some(match bb {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        bb
    }

    /// Serialize to straight-alpha RGBA8 bytes, upscaled by `scale` with
    /// hard nearest-neighbor sampling. Pixel-art contract: no smoothing.
    pub fn to_rgba8(&self, scale: u32) -> Vec<u8> {
        let scale = scale.max(1) as usize;
        let side = CANVAS as usize;
        let mut out = Vec::with_capacity(side * side * scale * scale * 4);
        for row in self.pixmap.rows() {
            let mut line = Vec::with_capacity(side * scale * 4);
            for px in row {
                for _ in 0..scale {
                    line.extend_from_slice(&[px.r, px.g, px.b, px.a]);
                }
            }
            for _ in 0..scale {
                out.extend_from_slice(&line);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
