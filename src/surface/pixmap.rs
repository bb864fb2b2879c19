use crate::foundation::color::{Ramp, RampSpec, shade};
use crate::foundation::core::{CANVAS, FidelityTier, MARGIN, Rgb, Rgba};
use crate::surface::stencil::{StampOpts, Stencil};

/// A square straight-alpha RGBA8 raster buffer, `CANVAS` pixels on a side.
///
/// Coordinates handed to a pixmap are *logical*: `(0, 0)` is the top-left of
/// the 32x32 character grid, and the fixed margin is added internally. Out of
/// bounds writes clip silently.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    px: Vec<Rgba>,
}

impl Pixmap {
    /// A fully transparent pixmap.
    pub fn new() -> Self {
        Self {
            px: vec![Rgba::TRANSPARENT; (CANVAS * CANVAS) as usize],
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        let px = x + MARGIN;
        let py = y + MARGIN;
        if px < 0 || py < 0 || px >= CANVAS || py >= CANVAS {
            return None;
        }
        Some((py * CANVAS + px) as usize)
    }

    /// Read the pixel at logical `(x, y)`; out-of-bounds reads are
    /// transparent.
    pub fn get(&self, x: i32, y: i32) -> Rgba {
        Self::index(x, y).map_or(Rgba::TRANSPARENT, |i| self.px[i])
    }

    /// Source-over blend `color` at logical `(x, y)`.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = Self::index(x, y) {
            self.px[i] = color.over(self.px[i]);
        }
    }

    /// Overwrite the pixel at logical `(x, y)`, alpha included.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = Self::index(x, y) {
            self.px[i] = color;
        }
    }

    /// Clear the pixel at logical `(x, y)` to transparent.
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.put(x, y, Rgba::TRANSPARENT);
    }

    /// Reset the whole buffer to transparent.
    pub fn clear(&mut self) {
        self.px.fill(Rgba::TRANSPARENT);
    }

    /// Mirror the buffer in place about its vertical center line.
    ///
    /// The margin is symmetric, so mirroring the physical buffer mirrors the
    /// logical grid about `MIRROR_X` exactly.
    pub fn mirror_horizontal(&mut self) {
        for row in self.px.chunks_exact_mut(CANVAS as usize) {
            row.reverse();
        }
    }

    /// Iterate physical rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.px.chunks_exact(CANVAS as usize)
    }
}

impl Default for Pixmap {
    fn default() -> Self {
        Self::new()
    }
}

/// Compositing layers, bottom to top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Ground shadow (floating species only).
    Shadow,
    /// Behind the body: wings, weapon shafts, the far arm.
    Back,
    /// The body core: legs, torso, head, hair, equipment worn on the body.
    #[default]
    Body,
    /// In front of the body: near hand, shield, fangs, helmet brims.
    Front,
}

impl Layer {
    /// All layers, bottom to top.
    pub const ALL: [Layer; 4] = [Layer::Shadow, Layer::Back, Layer::Body, Layer::Front];

    fn index(self) -> usize {
        match self {
            Layer::Shadow => 0,
            Layer::Back => 1,
            Layer::Body => 2,
            Layer::Front => 3,
        }
    }
}

/// The multi-layer paint surface used by part renderers.
///
/// Owns one [`Pixmap`] per [`Layer`] plus a current-layer selector, so a part
/// renderer sets its layer once and then draws layer-agnostically. All shape
/// helpers consult the fidelity tier; a tier changes only the coloring of
/// filled cells, never which cells are filled. The one tier-conditional
/// alpha effect (soft corners) blends into already-painted cells only, so
/// the combined alpha mask is tier-invariant.
pub struct Painter {
    layers: [Pixmap; 4],
    current: Layer,
    tier: FidelityTier,
}

impl Painter {
    /// A cleared painter at the given fidelity tier, current layer `Body`.
    pub fn new(tier: FidelityTier) -> Self {
        Self {
            layers: [Pixmap::new(), Pixmap::new(), Pixmap::new(), Pixmap::new()],
            current: Layer::Body,
            tier,
        }
    }

    /// The active fidelity tier.
    pub fn tier(&self) -> FidelityTier {
        self.tier
    }

    /// Select the layer subsequent drawing calls target.
    pub fn set_layer(&mut self, layer: Layer) {
        self.current = layer;
    }

    /// The currently selected layer.
    pub fn layer(&self) -> Layer {
        self.current
    }

    /// Borrow a layer's pixmap.
    pub fn pixmap(&self, layer: Layer) -> &Pixmap {
        &self.layers[layer.index()]
    }

    fn current_mut(&mut self) -> &mut Pixmap {
        &mut self.layers[self.current.index()]
    }

    /// Whether any layer already has paint at logical `(x, y)`.
    pub fn stack_has_content(&self, x: i32, y: i32) -> bool {
        self.layers.iter().any(|l| l.get(x, y).a != 0)
    }

    /// Paint one pixel on the current layer.
    pub fn pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.current_mut().blend(x, y, color);
    }

    /// Clear one pixel on the current layer.
    pub fn erase_pixel(&mut self, x: i32, y: i32) {
        self.current_mut().clear_pixel(x, y);
    }

    /// Fill a rectangle on the current layer.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let pm = self.current_mut();
        for dy in 0..h {
            for dx in 0..w {
                pm.blend(x + dx, y + dy, color);
            }
        }
    }

    /// Clear a rectangle on the current layer to transparent.
    pub fn erase_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let pm = self.current_mut();
        for dy in 0..h {
            for dx in 0..w {
                pm.clear_pixel(x + dx, y + dy);
            }
        }
    }

    /// Fill the checkerboard half of a rectangle: cells where
    /// `(x + y) % 2 == 0` in *logical* coordinates, so adjacent dithered
    /// regions interlock seamlessly.
    pub fn dither_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let pm = self.current_mut();
        for dy in 0..h {
            for dx in 0..w {
                let (px, py) = (x + dx, y + dy);
                if (px + py).rem_euclid(2) == 0 {
                    pm.blend(px, py, color);
                }
            }
        }
    }

    /// Fill a rectangle with tier-dependent shading.
    ///
    /// Flat: a plain fill. Dithered: light top/left edges and dithered dark
    /// bottom/right edges (solid when the rect is too small to dither), plus
    /// a specular dot on metal. Gradient: a diagonal top-left-to-bottom-right
    /// gradient through the surface's color stops. The filled cell set is
    /// identical in all three tiers.
    pub fn shaded_rect(&mut self, x: i32, y: i32, w: i32, h: i32, base: Rgb, metal: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        match self.tier {
            FidelityTier::Flat => {
                self.rect(x, y, w, h, base.opaque());
            }
            FidelityTier::Gradient => {
                self.gradient_rect(x, y, w, h, base, metal);
            }
            FidelityTier::Dithered => {
                let spec = if metal { RampSpec::METAL } else { RampSpec::CLOTH };
                let ramp = Ramp::quantized(base, spec);

                self.rect(x, y, w, h, base.opaque());
                self.rect(x, y, w, 1, ramp.light.opaque());
                self.rect(x, y, 1, h, ramp.light.opaque());

                if w > 2 && h > 2 {
                    self.dither_rect(x + w - 1, y, 1, h, ramp.shadow.opaque());
                    self.dither_rect(x, y + h - 1, w, 1, ramp.shadow.opaque());
                } else {
                    self.rect(x + w - 1, y, 1, h, ramp.shadow.opaque());
                    self.rect(x, y + h - 1, w, 1, ramp.shadow.opaque());
                }

                if metal && w > 2 && h > 2 {
                    self.pixel(x + 1, y + 1, Rgba::opaque(255, 255, 255));
                } else {
                    // Soften the corners where the light and shadow edges meet.
                    self.pixel(x + w - 1, y, base.opaque());
                    self.pixel(x, y + h - 1, base.opaque());
                }
            }
        }
    }

    fn gradient_rect(&mut self, x: i32, y: i32, w: i32, h: i32, base: Rgb, metal: bool) {
        // Diagonal gradient: project each cell onto the top-left to
        // bottom-right axis and interpolate through the stop list.
        let stops: &[(f32, i16)] = if metal {
            &[(0.0, 90), (0.4, 0), (0.6, -40), (1.0, -80)]
        } else {
            &[(0.0, 20), (1.0, -30)]
        };
        let span = (w + h - 2).max(1) as f32;
        for dy in 0..h {
            for dx in 0..w {
                let t = (dx + dy) as f32 / span;
                let delta = interpolate_stops(stops, t);
                let color = shade(base, delta).opaque();
                self.current_mut().blend(x + dx, y + dy, color);
            }
        }
    }

    /// Fill a rectangle with its four corner pixels left unpainted, reading
    /// as a rounded block at sprite scale.
    ///
    /// At the gradient tier the corners get a 40% echo of the fill color,
    /// but only over cells some layer has already painted, so the soft
    /// corners antialias interior detail without growing the silhouette.
    pub fn rounded_block(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.rect(x + 1, y, w - 2, h, color);
        self.rect(x, y + 1, 1, h - 2, color);
        self.rect(x + w - 1, y + 1, 1, h - 2, color);

        if self.tier == FidelityTier::Gradient {
            let soft = color.alpha_scaled(0.4);
            for (cx, cy) in [
                (x, y),
                (x + w - 1, y),
                (x, y + h - 1),
                (x + w - 1, y + h - 1),
            ] {
                if self.stack_has_content(cx, cy) {
                    self.pixel(cx, cy, soft);
                }
            }
        }
    }

    /// Hip/waist block: a rounded block widened one pixel near the bottom,
    /// with a shaded hem above the flat tier.
    pub fn soft_hips(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.rounded_block(x, y, w, h, color);
        if w >= 8 && h >= 4 {
            self.pixel(x + 1, y + h - 2, color);
            self.pixel(x + w - 2, y + h - 2, color);
        }
        if self.tier != FidelityTier::Flat {
            let base = color.rgb();
            self.rect(x + 2, y + h - 1, w - 4, 1, shade(base, -22).with_alpha(color.a));
        }
    }

    /// Stamp a bitmap stencil onto the current layer at top-left `(x, y)`.
    ///
    /// `palette` maps stencil characters to paint colors; cells whose
    /// character is `.` or unmapped are skipped, or actively cleared when
    /// `opts.erase` is set. `opts.flip_x` mirrors sampling within the
    /// stencil's own width, leaving the placement anchor untouched.
    pub fn stamp(
        &mut self,
        stencil: &Stencil,
        x: i32,
        y: i32,
        palette: &[(char, Rgba)],
        opts: StampOpts,
    ) {
        for ay in 0..stencil.h {
            for ax in 0..stencil.w {
                let sx = if opts.flip_x { stencil.w - 1 - ax } else { ax };
                match stencil.cell(sx, ay).and_then(|ch| lookup(palette, ch)) {
                    Some(color) => self.pixel(x + ax, y + ay, color),
                    None => {
                        if opts.erase {
                            self.erase_pixel(x + ax, y + ay);
                        }
                    }
                }
            }
        }
    }

    /// Flatten all layers bottom-to-top into a single pixmap.
    pub fn flatten(&self) -> Pixmap {
        let mut out = self.layers[0].clone();
        for layer in &self.layers[1..] {
            for y in -MARGIN..CANVAS - MARGIN {
                for x in -MARGIN..CANVAS - MARGIN {
                    let src = layer.get(x, y);
                    if src.a != 0 {
                        out.put(x, y, src.over(out.get(x, y)));
                    }
                }
            }
        }
        out
    }
}

fn lookup(palette: &[(char, Rgba)], ch: char) -> Option<Rgba> {
    if ch == '.' {
        return None;
    }
    palette.iter().find(|(c, _)| *c == ch).map(|(_, color)| *color)
}

fn interpolate_stops(stops: &[(f32, i16)], t: f32) -> i16 {
    let t = t.clamp(0.0, 1.0);
    let mut prev = stops[0];
    for &stop in &stops[1..] {
        if t <= stop.0 {
            let span = stop.0 - prev.0;
            if span <= f32::EPSILON {
                return stop.1;
            }
            let f = (t - prev.0) / span;
            return (f32::from(prev.1) + (f32::from(stop.1) - f32::from(prev.1)) * f).round()
                as i16;
        }
        prev = stop;
    }
    prev.1
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixmap.rs"]
mod tests;
