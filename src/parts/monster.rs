//! Monster parts: wings, tails, and horns.
//!
//! Front-view wings and horns are drawn as a left half plus its exact
//! mirror, so the mirror invariant holds by construction. Species floors
//! apply here: a Demon always has horns, a Birdman always has wings, a
//! Lizardman always has a (skin-tinted) tail, even when the slot is 0.

use crate::character::model::Species;
use crate::foundation::core::{Rgba, WalkPhase, mirror_x};
use crate::layout::anchors::View;
use crate::parts::{Rig, colors};
use crate::surface::pixmap::{Layer, Painter};

const FAIRY_GLASS: Rgba = Rgba::new(162, 155, 254, 153);

/// Fill `(x, y, w, h)` and its mirror image about the grid center.
fn sym_rect(p: &mut Painter, x: i32, y: i32, w: i32, h: i32, c: Rgba) {
    p.rect(x, y, w, h, c);
    p.rect(mirror_x(x + w - 1), y, w, h, c);
}

fn sym_pixel(p: &mut Painter, x: i32, y: i32, c: Rgba) {
    p.pixel(x, y, c);
    p.pixel(mirror_x(x), y, c);
}

fn effective_wings(rig: &Rig<'_>) -> u8 {
    match (rig.desc.species, rig.desc.wings) {
        (Species::Birdman, 0) => 2,
        (_, w) => w,
    }
}

fn effective_tail(rig: &Rig<'_>) -> u8 {
    match (rig.desc.species, rig.desc.tail) {
        (Species::Lizardman, 0) => 3,
        (_, t) => t,
    }
}

fn effective_horns(rig: &Rig<'_>) -> u8 {
    match (rig.desc.species, rig.desc.horns) {
        (Species::Demon, 0) => 4,
        (_, h) => h,
    }
}

/// Wings. Front view puts them behind the body, back view in front (the
/// character has turned around), side view shows a small tuft in front.
pub fn draw_wings(p: &mut Painter, rig: &Rig<'_>, back_layer: bool) {
    let style = effective_wings(rig);
    if style == 0 {
        return;
    }
    // Front wings belong behind the body; back wings in front of it.
    match rig.view {
        View::Front if !back_layer => return,
        View::Back if back_layer => return,
        View::Side if back_layer => return,
        _ => {}
    }
    p.set_layer(if back_layer { Layer::Back } else { Layer::Front });

    let slime_drop = if rig.desc.species == Species::Slime { 16 } else { 0 };
    let wy = 14 + rig.motion.y_offset + slime_drop;
    let wc = rig.desc.wing_color.opaque();

    if rig.view == View::Side {
        draw_side_wing(p, style, wy, wc);
        return;
    }

    match style {
        // Bat: webbed membrane with claw tips.
        1 => {
            sym_rect(p, 4, wy - 3, 7, 1, wc);
            sym_pixel(p, 3, wy - 2, wc);
            sym_pixel(p, 2, wy - 1, wc);
            sym_rect(p, 3, wy, 2, 4, wc);
            sym_rect(p, 5, wy - 2, 5, 5, wc);
            sym_pixel(p, 5, wy + 3, wc);
            sym_pixel(p, 7, wy + 3, wc);
            sym_pixel(p, 9, wy + 3, wc);
        }
        // Angel: fixed feather white with gray flight-feather tips.
        2 => {
            let feather = colors::BONE.opaque();
            let tip = Rgba::opaque(0xbd, 0xc3, 0xc7);
            sym_rect(p, 2, wy - 6, 12, 2, feather);
            sym_rect(p, 0, wy - 4, 4, 6, feather);
            sym_rect(p, 4, wy - 4, 8, 10, feather);
            sym_rect(p, 6, wy + 6, 6, 3, feather);
            sym_pixel(p, 0, wy + 2, tip);
            sym_pixel(p, 1, wy + 4, tip);
            sym_pixel(p, 3, wy + 6, tip);
        }
        // Fairy: translucent panes, color fixed.
        3 => {
            sym_rect(p, 4, wy - 5, 6, 5, FAIRY_GLASS);
            sym_rect(p, 5, wy, 4, 3, FAIRY_GLASS);
            sym_pixel(p, 3, wy - 4, FAIRY_GLASS);
        }
        // Dragon: ribbed membrane with a thumb spike.
        4 => {
            sym_rect(p, 2, wy - 4, 3, 8, wc);
            sym_rect(p, 5, wy - 3, 5, 7, wc);
            sym_pixel(p, 4, wy - 5, wc);
            sym_pixel(p, 5, wy + 4, wc);
            sym_pixel(p, 7, wy + 4, wc);
            sym_pixel(p, 9, wy + 4, wc);
        }
        // Butterfly: two lobes with white spots.
        5 => {
            let spot = colors::WHITE.opaque();
            sym_rect(p, 3, wy - 5, 6, 5, wc);
            sym_rect(p, 4, wy + 1, 5, 4, wc);
            sym_pixel(p, 5, wy - 3, spot);
            sym_pixel(p, 6, wy + 2, spot);
        }
        // Demon: oversized bat silhouette with longer claws.
        _ => {
            sym_rect(p, 2, wy - 5, 9, 1, wc);
            sym_pixel(p, 1, wy - 4, wc);
            sym_rect(p, 2, wy - 4, 2, 6, wc);
            sym_rect(p, 4, wy - 3, 6, 6, wc);
            sym_pixel(p, 4, wy + 4, wc);
            sym_pixel(p, 6, wy + 4, wc);
            sym_pixel(p, 8, wy + 4, wc);
        }
    }
}

fn draw_side_wing(p: &mut Painter, style: u8, wy: i32, wc: Rgba) {
    match style {
        1 => {
            p.rect(18, wy + 2, 4, 1, wc);
            p.rect(21, wy + 3, 3, 1, wc);
            p.rect(23, wy + 4, 2, 2, wc);
            p.pixel(20, wy + 3, wc);
            p.pixel(22, wy + 5, wc);
        }
        2 => {
            let feather = colors::BONE.opaque();
            p.rect(18, wy + 1, 4, 2, feather);
            p.rect(20, wy + 3, 3, 2, feather);
            p.pixel(22, wy + 5, Rgba::opaque(0xbd, 0xc3, 0xc7));
        }
        3 => {
            p.rect(19, wy, 3, 3, FAIRY_GLASS);
            p.pixel(22, wy + 3, FAIRY_GLASS);
        }
        4 => {
            p.rect(18, wy + 1, 5, 2, wc);
            p.rect(21, wy + 3, 3, 2, wc);
            p.pixel(23, wy + 5, wc);
        }
        5 => {
            p.rect(19, wy, 3, 2, wc);
            p.rect(20, wy + 3, 3, 2, wc);
        }
        _ => {
            p.rect(17, wy + 1, 5, 1, wc);
            p.rect(20, wy + 2, 4, 1, wc);
            p.rect(23, wy + 3, 2, 3, wc);
            p.pixel(19, wy + 2, wc);
            p.pixel(22, wy + 6, wc);
        }
    }
}

/// Tail. Swishes up one pixel on the passing frame. Lizardman tails are
/// tinted with the skin color so they read as part of the body.
pub fn draw_tail(p: &mut Painter, rig: &Rig<'_>, back_layer: bool) {
    let style = effective_tail(rig);
    if style == 0 {
        return;
    }
    // The tail hangs behind in front/side views and in front when the
    // character faces away.
    match rig.view {
        View::Front | View::Side if !back_layer => return,
        View::Back if back_layer => return,
        _ => {}
    }
    p.set_layer(if back_layer { Layer::Back } else { Layer::Front });

    let tc = if rig.desc.species == Species::Lizardman {
        rig.desc.skin_color.opaque()
    } else {
        rig.desc.tail_color.opaque()
    };
    let slime_drop = if rig.desc.species == Species::Slime { 16 } else { 0 };
    let ta = if rig.phase == WalkPhase::Passing { 1 } else { 0 } + slime_drop;

    match (rig.view, style) {
        (View::Front, 1) => {
            p.rect(21, 22 + ta, 4, 1, tc);
            p.rect(24, 20 + ta, 1, 2, tc);
            p.rect(23, 19 + ta, 3, 2, tc);
        }
        (View::Front, 2) => {
            p.rect(21, 23 + ta, 3, 1, tc);
            p.rect(23, 20 + ta, 1, 3, tc);
            p.pixel(24, 19 + ta, tc);
            p.pixel(23, 18 + ta, tc);
            p.pixel(25, 18 + ta, tc);
        }
        (View::Front, 3) => {
            p.rect(21, 22 + ta, 4, 2, tc);
            p.rect(24, 20 + ta, 2, 2, tc);
            p.pixel(25, 19 + ta, tc);
        }
        (View::Front, 4) => {
            p.rect(21, 20 + ta, 4, 4, tc);
            p.pixel(22, 21 + ta, colors::WHITE.opaque());
        }
        (View::Front, _) => p.rect(21, 22 + ta, 2, 2, tc),

        (View::Side, 1) => {
            p.rect(18, 22 + ta, 3, 1, tc);
            p.rect(20, 19 + ta, 2, 3, tc);
            p.pixel(21, 18 + ta, tc);
        }
        (View::Side, 2) => {
            p.rect(18, 23 + ta, 3, 1, tc);
            p.rect(20, 20 + ta, 1, 3, tc);
            p.pixel(21, 19 + ta, tc);
            p.pixel(22, 18 + ta, tc);
        }
        (View::Side, 3) => {
            p.rect(18, 21 + ta, 4, 3, tc);
            p.rect(21, 19 + ta, 2, 2, tc);
        }
        (View::Side, 4) => {
            p.rect(18, 20 + ta, 4, 4, tc);
            p.pixel(19, 21 + ta, colors::WHITE.opaque());
        }
        (View::Side, _) => p.rect(19, 22 + ta, 2, 2, tc),

        (View::Back, 1) => {
            p.rect(16, 22 + ta, 6, 1, tc);
            p.rect(21, 19 + ta, 2, 3, tc);
        }
        (View::Back, 2) => {
            p.rect(16, 23 + ta, 6, 1, tc);
            p.rect(21, 20 + ta, 1, 3, tc);
            p.pixel(22, 19 + ta, tc);
        }
        (View::Back, 3) => {
            p.rect(16, 21 + ta, 6, 2, tc);
            p.rect(20, 19 + ta, 3, 2, tc);
        }
        (View::Back, 4) => {
            p.rect(15, 20 + ta, 4, 4, tc);
            p.pixel(16, 21 + ta, colors::WHITE.opaque());
        }
        (View::Back, _) => p.rect(15, 22 + ta, 2, 2, tc),
    }
}

/// Horns on the front layer, hanging off the head anchor. Slimes wear them
/// lower (and shifted forward in profile) since the blob has no head row.
pub fn draw_horns(p: &mut Painter, rig: &Rig<'_>) {
    let style = effective_horns(rig);
    if style == 0 {
        return;
    }
    p.set_layer(Layer::Front);

    let hc = rig.desc.horn_color.opaque();
    let hy = rig.anchors.head.top_left.y + if rig.desc.species == Species::Slime { -4 } else { 0 };
    let sx = if rig.desc.species == Species::Slime && rig.view == View::Side {
        4
    } else {
        0
    };

    if rig.view == View::Side {
        match style {
            1 => p.rect(12 + sx, hy - 2, 2, 2, hc),
            2 => {
                p.rect(11 + sx, hy - 2, 3, 2, hc);
                p.rect(10 + sx, hy - 4, 1, 3, hc);
            }
            3 => {
                p.rect(12 + sx, hy - 5, 1, 5, hc);
                p.rect(12 + sx, hy - 2, 2, 2, hc);
            }
            4 => {
                p.rect(12 + sx, hy - 2, 2, 2, hc);
                p.rect(11 + sx, hy - 4, 2, 2, hc);
                p.pixel(10 + sx, hy - 5, hc);
            }
            5 => {
                p.rect(12 + sx, hy - 4, 1, 4, hc);
                p.pixel(11 + sx, hy - 5, hc);
                p.pixel(13 + sx, hy - 5, hc);
            }
            _ => p.rect(11 + sx, hy - 5, 2, 5, hc),
        }
        return;
    }

    match style {
        // Nubs.
        1 => sym_rect(p, 11, hy - 2, 2, 2, hc),
        // Curved.
        2 => {
            sym_rect(p, 9, hy - 2, 3, 2, hc);
            sym_rect(p, 8, hy - 4, 1, 3, hc);
        }
        // Long.
        3 => {
            sym_rect(p, 10, hy - 5, 1, 5, hc);
            sym_rect(p, 11, hy - 2, 2, 2, hc);
        }
        // Demon: swept-back with a raised tip.
        4 => {
            sym_rect(p, 10, hy - 2, 2, 2, hc);
            sym_rect(p, 9, hy - 4, 2, 2, hc);
            sym_pixel(p, 8, hy - 5, hc);
        }
        // Antlers.
        5 => {
            sym_rect(p, 10, hy - 4, 1, 4, hc);
            sym_pixel(p, 9, hy - 5, hc);
            sym_pixel(p, 11, hy - 5, hc);
        }
        // Unicorn: one central spike straddling the mirror axis.
        _ => p.rect(15, hy - 5, 2, 5, hc),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/monster.rs"]
mod tests;
