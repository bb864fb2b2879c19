use super::*;

use crate::foundation::core::{GRID, MIRROR_X};

fn mask(pm: &Pixmap) -> Vec<bool> {
    let mut out = Vec::new();
    for y in -MARGIN..CANVAS - MARGIN {
        for x in -MARGIN..CANVAS - MARGIN {
            out.push(pm.get(x, y).a != 0);
        }
    }
    out
}

fn flat_mask(p: &Painter) -> Vec<bool> {
    mask(&p.flatten())
}

#[test]
fn put_then_get_round_trips() {
    let mut pm = Pixmap::new();
    let c = Rgba::opaque(10, 20, 30);
    pm.put(5, 7, c);
    assert_eq!(pm.get(5, 7), c);
    assert_eq!(pm.get(5, 8), Rgba::TRANSPARENT);
}

#[test]
fn margin_overdraw_is_kept_and_far_out_of_bounds_clips() {
    let mut pm = Pixmap::new();
    // Inside the margin band: retained.
    pm.put(-1, -1, Rgba::opaque(1, 1, 1));
    assert_eq!(pm.get(-1, -1), Rgba::opaque(1, 1, 1));
    pm.put(GRID + 3, 0, Rgba::opaque(2, 2, 2));
    assert_eq!(pm.get(GRID + 3, 0), Rgba::opaque(2, 2, 2));
    // Beyond the margin: silently dropped.
    pm.put(-MARGIN - 1, 0, Rgba::opaque(3, 3, 3));
    pm.put(0, CANVAS, Rgba::opaque(3, 3, 3));
    assert_eq!(pm.get(-MARGIN - 1, 0), Rgba::TRANSPARENT);
    assert_eq!(pm.get(0, CANVAS), Rgba::TRANSPARENT);
}

#[test]
fn blend_composites_and_put_overwrites() {
    let mut pm = Pixmap::new();
    pm.put(0, 0, Rgba::opaque(0, 0, 0));
    pm.blend(0, 0, Rgba::new(255, 255, 255, 128));
    assert!(pm.get(0, 0).r > 100);
    pm.put(0, 0, Rgba::new(9, 9, 9, 9));
    assert_eq!(pm.get(0, 0), Rgba::new(9, 9, 9, 9));
}

#[test]
fn mirror_maps_logical_x_about_the_grid_center() {
    let mut pm = Pixmap::new();
    pm.put(3, 10, Rgba::opaque(200, 0, 0));
    pm.put(-2, 4, Rgba::opaque(0, 200, 0));
    pm.mirror_horizontal();
    assert_eq!(pm.get(MIRROR_X - 3, 10), Rgba::opaque(200, 0, 0));
    assert_eq!(pm.get(3, 10), Rgba::TRANSPARENT);
    // Margin pixels mirror too.
    assert_eq!(pm.get(MIRROR_X + 2, 4), Rgba::opaque(0, 200, 0));
}

#[test]
fn mirror_twice_is_identity() {
    let mut pm = Pixmap::new();
    pm.put(1, 2, Rgba::opaque(5, 6, 7));
    pm.put(30, 31, Rgba::new(8, 9, 10, 11));
    let before = pm.clone();
    pm.mirror_horizontal();
    pm.mirror_horizontal();
    assert!(pm == before);
}

#[test]
fn painter_draws_on_the_selected_layer_only() {
    let mut p = Painter::new(FidelityTier::Flat);
    p.set_layer(Layer::Back);
    p.pixel(4, 4, Rgba::opaque(1, 2, 3));
    assert_eq!(p.pixmap(Layer::Back).get(4, 4), Rgba::opaque(1, 2, 3));
    assert_eq!(p.pixmap(Layer::Body).get(4, 4), Rgba::TRANSPARENT);
    assert_eq!(p.layer(), Layer::Back);
}

#[test]
fn stack_has_content_sees_every_layer() {
    let mut p = Painter::new(FidelityTier::Flat);
    assert!(!p.stack_has_content(6, 6));
    p.set_layer(Layer::Shadow);
    p.pixel(6, 6, Rgba::new(0, 0, 0, 51));
    assert!(p.stack_has_content(6, 6));
}

#[test]
fn flatten_orders_layers_bottom_to_top() {
    let mut p = Painter::new(FidelityTier::Flat);
    p.set_layer(Layer::Back);
    p.pixel(2, 2, Rgba::opaque(10, 10, 10));
    p.set_layer(Layer::Front);
    p.pixel(2, 2, Rgba::opaque(250, 250, 250));
    let flat = p.flatten();
    assert_eq!(flat.get(2, 2), Rgba::opaque(250, 250, 250));
}

#[test]
fn dither_uses_logical_parity() {
    let mut p = Painter::new(FidelityTier::Flat);
    let c = Rgba::opaque(9, 9, 9);
    p.dither_rect(3, 4, 4, 4, c);
    let pm = p.pixmap(Layer::Body);
    for dy in 0..4 {
        for dx in 0..4 {
            let (x, y) = (3 + dx, 4 + dy);
            let expect = (x + y) % 2 == 0;
            assert_eq!(pm.get(x, y).a != 0, expect, "at ({x}, {y})");
        }
    }
}

#[test]
fn adjacent_dither_rects_interlock() {
    let mut a = Painter::new(FidelityTier::Flat);
    a.dither_rect(0, 0, 4, 2, Rgba::opaque(1, 1, 1));
    a.dither_rect(4, 0, 4, 2, Rgba::opaque(1, 1, 1));
    let mut b = Painter::new(FidelityTier::Flat);
    b.dither_rect(0, 0, 8, 2, Rgba::opaque(1, 1, 1));
    assert_eq!(flat_mask(&a), flat_mask(&b));
}

#[test]
fn shaded_rect_mask_is_identical_across_tiers() {
    let base = Rgb::new(0x34, 0x98, 0xdb);
    let mut masks = Vec::new();
    for tier in [
        FidelityTier::Flat,
        FidelityTier::Dithered,
        FidelityTier::Gradient,
    ] {
        let mut p = Painter::new(tier);
        p.shaded_rect(5, 5, 10, 12, base, false);
        p.shaded_rect(2, 20, 2, 3, base, true);
        masks.push(flat_mask(&p));
    }
    assert_eq!(masks[0], masks[1]);
    assert_eq!(masks[1], masks[2]);
}

#[test]
fn dithered_metal_gets_a_specular_dot() {
    let base = Rgb::new(0xbd, 0xc3, 0xc7);
    let mut p = Painter::new(FidelityTier::Dithered);
    p.shaded_rect(4, 4, 6, 6, base, true);
    assert_eq!(p.pixmap(Layer::Body).get(5, 5), Rgba::opaque(255, 255, 255));
}

#[test]
fn tiny_dithered_rect_uses_solid_shadow_edges() {
    let base = Rgb::new(0xe7, 0x4c, 0x3c);
    let mut p = Painter::new(FidelityTier::Dithered);
    p.shaded_rect(0, 0, 2, 5, base, false);
    // Every cell in a w<=2 rect must be painted despite the dither rule.
    let pm = p.pixmap(Layer::Body);
    for y in 0..5 {
        for x in 0..2 {
            assert_ne!(pm.get(x, y).a, 0, "at ({x}, {y})");
        }
    }
}

#[test]
fn gradient_shading_darkens_toward_the_bottom_right() {
    let base = Rgb::new(0x34, 0x98, 0xdb);
    let mut p = Painter::new(FidelityTier::Gradient);
    p.shaded_rect(0, 0, 8, 8, base, false);
    let pm = p.pixmap(Layer::Body);
    let luma = |c: Rgba| u32::from(c.r) + u32::from(c.g) + u32::from(c.b);
    assert!(luma(pm.get(0, 0)) > luma(pm.get(7, 7)));
}

#[test]
fn rounded_block_leaves_its_corners_unpainted() {
    for tier in [
        FidelityTier::Flat,
        FidelityTier::Dithered,
        FidelityTier::Gradient,
    ] {
        let mut p = Painter::new(tier);
        p.rounded_block(10, 10, 6, 5, Rgba::opaque(1, 2, 3));
        let pm = p.pixmap(Layer::Body);
        for (cx, cy) in [(10, 10), (15, 10), (10, 14), (15, 14)] {
            assert_eq!(pm.get(cx, cy).a, 0, "corner ({cx}, {cy})");
        }
        assert_ne!(pm.get(11, 10).a, 0);
        assert_ne!(pm.get(10, 11).a, 0);
    }
}

#[test]
fn gradient_rounded_corners_blend_only_over_existing_paint() {
    let mut p = Painter::new(FidelityTier::Gradient);
    p.set_layer(Layer::Back);
    p.pixel(10, 10, Rgba::opaque(40, 40, 40));
    p.set_layer(Layer::Body);
    p.rounded_block(10, 10, 6, 5, Rgba::opaque(200, 0, 0));
    let pm = p.pixmap(Layer::Body);
    // Backed corner receives the soft echo; bare corners stay empty.
    assert_ne!(pm.get(10, 10).a, 0);
    assert_eq!(pm.get(15, 10).a, 0);
    assert_eq!(pm.get(10, 14).a, 0);
}

#[test]
fn stamp_flips_within_the_stencil_width() {
    const ARROW: Stencil = Stencil::new(3, 1, &["x.."]);
    let pal = [('x', Rgba::opaque(1, 1, 1))];
    let mut p = Painter::new(FidelityTier::Flat);
    p.stamp(&ARROW, 0, 0, &pal, StampOpts::default());
    p.stamp(&ARROW, 0, 1, &pal, StampOpts::FLIPPED);
    let pm = p.pixmap(Layer::Body);
    assert_ne!(pm.get(0, 0).a, 0);
    assert_eq!(pm.get(2, 0).a, 0);
    assert_ne!(pm.get(2, 1).a, 0);
    assert_eq!(pm.get(0, 1).a, 0);
}

#[test]
fn stamp_erase_carves_unmapped_cells() {
    const DOT: Stencil = Stencil::new(2, 1, &["x."]);
    let pal = [('x', Rgba::opaque(1, 1, 1))];
    let mut p = Painter::new(FidelityTier::Flat);
    p.rect(0, 0, 2, 1, Rgba::opaque(9, 9, 9));
    p.stamp(&DOT, 0, 0, &pal, StampOpts { flip_x: false, erase: true });
    let pm = p.pixmap(Layer::Body);
    assert_eq!(pm.get(0, 0), Rgba::opaque(1, 1, 1));
    assert_eq!(pm.get(1, 0), Rgba::TRANSPARENT);
}

#[test]
fn erase_rect_clears_only_the_current_layer() {
    let mut p = Painter::new(FidelityTier::Flat);
    p.set_layer(Layer::Back);
    p.rect(0, 0, 3, 3, Rgba::opaque(5, 5, 5));
    p.set_layer(Layer::Body);
    p.rect(0, 0, 3, 3, Rgba::opaque(6, 6, 6));
    p.erase_rect(1, 1, 1, 1);
    assert_eq!(p.pixmap(Layer::Body).get(1, 1), Rgba::TRANSPARENT);
    assert_eq!(p.pixmap(Layer::Back).get(1, 1), Rgba::opaque(5, 5, 5));
}
