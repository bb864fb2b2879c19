use crate::foundation::core::Rgb;

/// Shift a color lighter (positive delta) or darker (negative delta).
///
/// Plain lightness scaling reads as muddy in pixel art, so the shift also
/// rotates hue — toward yellow when lightening, toward blue-violet when
/// darkening — and nudges saturation the opposite way. `delta` is in
/// `-255..=255`; the lightness change is `delta / 255`.
///
/// Pure and deterministic: identical inputs always produce the identical
/// output color, which golden-image tests rely on.
pub fn shade(base: Rgb, delta: i16) -> Rgb {
    if delta == 0 {
        return base;
    }
    let (mut h, mut s, mut l) = rgb_to_hsl(base);

    l += f64::from(delta) / 255.0;
    if delta > 0 {
        // Highlight: toward yellow, slightly desaturated to read as glare.
        h -= 8.0;
        s -= 0.05;
    } else {
        // Shadow: toward blue-violet, slightly richer.
        h += 8.0;
        s += 0.10;
    }

    l = l.clamp(0.0, 1.0);
    s = s.clamp(0.0, 1.0);
    h = (h % 360.0 + 360.0) % 360.0;

    hsl_to_rgb(h, s, l)
}

/// Stop offsets for a quantized 4-step shading ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RampSpec {
    /// Darkest stop delta.
    pub shadow: i16,
    /// Mid-shadow stop delta.
    pub mid: i16,
    /// Light stop delta.
    pub light: i16,
    /// Brightest stop delta (used by gradient-tier metal profiles).
    pub highlight: i16,
}

impl RampSpec {
    /// Default ramp offsets for generic surfaces.
    pub const DEFAULT: RampSpec = RampSpec {
        shadow: -38,
        mid: -16,
        light: 26,
        highlight: 44,
    };

    /// Matte cloth profile: narrow contrast.
    pub const CLOTH: RampSpec = RampSpec {
        shadow: -40,
        mid: -16,
        light: 24,
        highlight: 48,
    };

    /// Metal profile: wide contrast to suggest specular sheen.
    pub const METAL: RampSpec = RampSpec {
        shadow: -70,
        mid: -28,
        light: 34,
        highlight: 70,
    };
}

/// A quantized 4-step pixel-art shading ramp `[shadow, mid, base, light]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ramp {
    /// Darkest band.
    pub shadow: Rgb,
    /// Mid-shadow band.
    pub mid: Rgb,
    /// The unmodified base color.
    pub base: Rgb,
    /// Light band.
    pub light: Rgb,
}

impl Ramp {
    /// Build the banded ramp for `base` using the given stop offsets.
    pub fn quantized(base: Rgb, spec: RampSpec) -> Self {
        Self {
            shadow: shade(base, spec.shadow),
            mid: shade(base, spec.mid),
            base,
            light: shade(base, spec.light),
        }
    }
}

fn rgb_to_hsl(c: Rgb) -> (f64, f64, f64) {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };
    let to_u8 = |x: f64| (x * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
