/// A declarative bitmap asset: rows of characters, `.` meaning transparent.
///
/// Stencils are shape-only; the palette supplied at stamp time binds each
/// character to an actual color, so one stencil serves every character's
/// color choices. Rows shorter than `w` are treated as padded with `.`.
#[derive(Clone, Copy, Debug)]
pub struct Stencil {
    /// Cell width.
    pub w: i32,
    /// Cell height.
    pub h: i32,
    /// Row bitmaps, top to bottom.
    pub rows: &'static [&'static str],
}

impl Stencil {
    /// Define a stencil from its row strings.
    pub const fn new(w: i32, h: i32, rows: &'static [&'static str]) -> Self {
        Self { w, h, rows }
    }

    /// The character at `(x, y)`, or `None` for `.`/missing cells.
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return None;
        }
        let ch = self.rows.get(y as usize)?.as_bytes().get(x as usize)?;
        if *ch == b'.' { None } else { Some(*ch as char) }
    }
}

/// Options for [`Painter::stamp`](crate::surface::pixmap::Painter::stamp).
#[derive(Clone, Copy, Debug, Default)]
pub struct StampOpts {
    /// Mirror sampling within the stencil's own width.
    pub flip_x: bool,
    /// Clear cells the stencil leaves unmapped instead of skipping them,
    /// letting one stencil both paint and carve.
    pub erase: bool,
}

impl StampOpts {
    /// Horizontal-mirror stamping.
    pub const FLIPPED: StampOpts = StampOpts {
        flip_x: true,
        erase: false,
    };
}

#[cfg(test)]
#[path = "../../tests/unit/surface/stencil.rs"]
mod tests;
