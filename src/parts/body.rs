//! Body, head, hair, eyes, and the species-specific body replacements.

use crate::character::model::{FaceShape, Species};
use crate::foundation::core::{Rgba, WalkPhase, mirror_x};
use crate::layout::anchors::{Point, View};
use crate::parts::{Rig, colors};
use crate::surface::pixmap::{Layer, Painter};
use crate::surface::stencil::{StampOpts, Stencil};

const BODY_HEIGHT: i32 = 12;
const LEG_HEIGHT: i32 = 12;
const FRONT_BODY_WIDTH: i32 = 10;
const SIDE_BODY_WIDTH: i32 = 6;
const FRONT_LEG_WIDTH: i32 = 4;
const ARM_WIDTH: i32 = 3;
const ARM_HEIGHT: i32 = 14;

// Face silhouettes, front view.
const FACE_FRONT_NORMAL: Stencil = Stencil::new(
    12,
    10,
    &[
        "..FFFFFFFF..",
        ".FFFFFFFFFF.",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        ".FFFFFFFFFF.",
    ],
);

const FACE_FRONT_ROUND: Stencil = Stencil::new(
    12,
    10,
    &[
        "...FFFFFF...",
        ".FFFFFFFFFF.",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        ".FFFFFFFFFF.",
        "..FFFFFFFF..",
    ],
);

const FACE_FRONT_SQUARE: Stencil = Stencil::new(
    12,
    10,
    &[
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
        "FFFFFFFFFFFF",
    ],
);

const FACE_FRONT_LONG: Stencil = Stencil::new(
    10,
    12,
    &[
        "..FFFFFF..",
        ".FFFFFFFF.",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        "FFFFFFFFFF",
        ".FFFFFFFF.",
    ],
);

// Face silhouettes, side profile.
const FACE_SIDE_NORMAL: Stencil = Stencil::new(
    8,
    10,
    &[
        "..FFFF..",
        ".FFFFFF.",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        ".FFFFFFF",
        "..FFFFF.",
    ],
);

const FACE_SIDE_ROUND: Stencil = Stencil::new(
    8,
    10,
    &[
        "...FFFF.",
        ".FFFFFF.",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        ".FFFFFFF",
        "..FFFFFF",
        "...FFFF.",
    ],
);

const FACE_SIDE_SQUARE: Stencil = Stencil::new(
    8,
    10,
    &[
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
        "FFFFFFFF",
    ],
);

const FACE_SIDE_LONG: Stencil = Stencil::new(
    7,
    12,
    &[
        "..FFFF.",
        ".FFFFF.",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        "FFFFFFF",
        ".FFFFFF",
        "..FFFF.",
    ],
);

fn face_stencil(shape: FaceShape, view: View) -> &'static Stencil {
    match (view, shape) {
        (View::Side, FaceShape::Normal) => &FACE_SIDE_NORMAL,
        (View::Side, FaceShape::Round) => &FACE_SIDE_ROUND,
        (View::Side, FaceShape::Square) => &FACE_SIDE_SQUARE,
        (View::Side, FaceShape::Long) => &FACE_SIDE_LONG,
        (_, FaceShape::Normal) => &FACE_FRONT_NORMAL,
        (_, FaceShape::Round) => &FACE_FRONT_ROUND,
        (_, FaceShape::Square) => &FACE_FRONT_SQUARE,
        (_, FaceShape::Long) => &FACE_FRONT_LONG,
    }
}

/// One eye at `(ox, oy)`. `iris_left` moves the iris to the leading edge
/// (side views and the mirrored right eye of a front pair).
fn draw_eye_unit(p: &mut Painter, ox: i32, oy: i32, style: u8, iris: Rgba, iris_left: bool) {
    let sclera = colors::WHITE.opaque();
    let mut r = |x: i32, y: i32, w: i32, h: i32, c: Rgba| p.rect(ox + x, oy + y, w, h, c);

    match style {
        0 => {
            if iris_left {
                r(0, 0, 1, 1, iris);
                r(1, 0, 1, 1, sclera);
            } else {
                r(0, 0, 1, 1, sclera);
                r(1, 0, 1, 1, iris);
            }
        }
        1 => {
            if iris_left {
                r(0, 0, 1, 2, iris);
                r(1, 0, 1, 2, sclera);
            } else {
                r(0, 0, 1, 2, sclera);
                r(1, 0, 1, 2, iris);
            }
        }
        2 => {
            if iris_left {
                r(0, 0, 1, 1, iris);
            } else {
                r(1, 0, 1, 1, iris);
            }
        }
        3 => r(0, 0, 2, 1, iris),
        4 => {
            if iris_left {
                r(0, 0, 1, 2, iris);
            } else {
                r(1, 0, 1, 2, iris);
            }
        }
        _ => {
            r(0, 0, 2, 2, sclera);
            if iris_left {
                r(0, 1, 1, 1, iris);
            } else {
                r(1, 1, 1, 1, iris);
            }
        }
    }
}

/// A mirrored front-view eye pair; the right eye's column follows from the
/// left eye's by mirroring the 2-wide unit about the grid center.
fn draw_eye_pair(p: &mut Painter, left: Point, style: u8, iris: Rgba) {
    draw_eye_unit(p, left.x, left.y, style, iris, false);
    draw_eye_unit(p, mirror_x(left.x) - 1, left.y, style, iris, true);
}

/// Ground shadow under floating species. Ghost-only; grounded characters
/// read as standing without one.
pub fn draw_ground_shadow(p: &mut Painter, rig: &Rig<'_>) {
    if rig.desc.species != Species::Ghost {
        return;
    }
    p.set_layer(Layer::Shadow);
    p.rect(10, 30, 12, 1, colors::GROUND_SHADOW.alpha_scaled(0.5));
}

fn draw_shoe_on_leg(p: &mut Painter, leg_x: i32, leg_y: i32, leg_w: i32, rig: &Rig<'_>) {
    let style = rig.desc.shoe_style;
    if style == 0 || rig.desc.species == Species::Skeleton {
        return;
    }
    let shoe_h = if style == 2 { 4 } else { 2 };
    let shoe_y = leg_y + LEG_HEIGHT - shoe_h;
    p.rect(leg_x, shoe_y, leg_w, shoe_h, rig.desc.shoe_color.opaque());
}

fn draw_ghost_wisp(p: &mut Painter, rig: &Rig<'_>) {
    let body = rig.body_color().opaque();
    let leg_y = rig.anchors.legs.left.y;
    if rig.view == View::Side {
        p.rect(13, leg_y, 6, 2, body);
        p.rect(14, leg_y + 2, 4, 2, body);
        p.pixel(14, leg_y + 4, body);
        p.pixel(16, leg_y + 4, body);
    } else {
        p.rect(11, leg_y, 10, 2, body);
        p.rect(12, leg_y + 2, 8, 2, body);
        p.rect(13, leg_y + 4, 6, 1, body);
        p.pixel(13, leg_y + 5, body);
        p.pixel(15, leg_y + 5, body);
        p.pixel(17, leg_y + 5, body);
    }
}

fn draw_waist_garment(p: &mut Painter, rig: &Rig<'_>, chest_x: i32, body_w: i32) {
    let d = rig.desc;
    if d.waist_style == 0 || d.species == Species::Ghost {
        return;
    }
    let waist_y = rig.anchors.pelvis.top_left.y;
    let leg_y = rig.anchors.legs.left.y;
    let c = d.waist_color.opaque();
    match d.waist_style {
        // Belt: a single band across the hips.
        1 => p.rect(chest_x, waist_y + 2, body_w, 1, c),
        // Short skirt.
        2 => p.soft_hips(chest_x, leg_y, body_w, 6, c),
        // Sash: a double band.
        3 => p.rect(chest_x, waist_y + 2, body_w, 2, c),
        // Long skirt.
        _ => p.soft_hips(chest_x, leg_y, body_w, 9, c),
    }
}

/// Torso, legs, garments, and shoes. Slimes are handled entirely by
/// [`draw_slime_body`]; ghosts trade legs for a tapering wisp.
pub fn draw_body(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    if d.species == Species::Slime {
        return;
    }

    let body = rig.body_color().opaque();
    let legs_c = d.leg_color.opaque();
    let chest = rig.anchors.torso.top_left;
    let leg_y = rig.anchors.legs.left.y;
    let ghost = d.species == Species::Ghost;

    if rig.view == View::Side {
        p.rect(chest.x, chest.y, SIDE_BODY_WIDTH, BODY_HEIGHT, body);
        if ghost {
            draw_ghost_wisp(p, rig);
        } else {
            let l = rig.anchors.legs.left;
            let r = rig.anchors.legs.right;
            p.rect(l.x, l.y, SIDE_BODY_WIDTH, LEG_HEIGHT, legs_c);
            p.rect(r.x, r.y, SIDE_BODY_WIDTH, LEG_HEIGHT, legs_c);
        }

        if d.chest_style != 0 {
            p.shaded_rect(chest.x, chest.y, SIDE_BODY_WIDTH, BODY_HEIGHT, d.chest_color, false);
        }
        draw_waist_garment(p, rig, chest.x, SIDE_BODY_WIDTH);
        if !ghost {
            draw_shoe_on_leg(p, rig.anchors.legs.left.x, leg_y, SIDE_BODY_WIDTH, rig);
            draw_shoe_on_leg(p, rig.anchors.legs.right.x, leg_y, SIDE_BODY_WIDTH, rig);
        }
    } else {
        p.rect(chest.x, chest.y, FRONT_BODY_WIDTH, BODY_HEIGHT, body);
        if ghost {
            draw_ghost_wisp(p, rig);
        } else {
            let lx = rig.anchors.legs.left.x;
            let rx = rig.anchors.legs.right.x;
            p.rect(lx, leg_y, FRONT_LEG_WIDTH, LEG_HEIGHT, legs_c);
            p.rect(rx, leg_y, FRONT_LEG_WIDTH, LEG_HEIGHT, legs_c);
            // Crotch fill between the leg columns.
            let gap_x = lx + FRONT_LEG_WIDTH;
            let gap_w = rx - gap_x;
            if gap_w > 0 {
                p.rect(gap_x, leg_y, gap_w, 3, legs_c);
            }
        }

        if d.species == Species::Skeleton {
            // Ribcage plate showing through the bare torso.
            p.rect(chest.x + 3, chest.y + 2, 4, 6, colors::SLATE.opaque());
        }

        if d.chest_style != 0 {
            p.shaded_rect(chest.x, chest.y, FRONT_BODY_WIDTH, BODY_HEIGHT, d.chest_color, false);
            if d.chest_style == 5 {
                // Open vest: the midriff band shows skin.
                p.rect(chest.x, chest.y + 4, FRONT_BODY_WIDTH, 4, body);
            }
        }
        draw_waist_garment(p, rig, chest.x, FRONT_BODY_WIDTH);
        if !ghost {
            draw_shoe_on_leg(p, rig.anchors.legs.left.x, leg_y, FRONT_LEG_WIDTH, rig);
            draw_shoe_on_leg(p, rig.anchors.legs.right.x, leg_y, FRONT_LEG_WIDTH, rig);
        }
    }
}

/// Arms/hands on the front layer: both arms in front/back views, the
/// leading arm in side views. Sleeves follow the chest garment unless it is
/// absent or the open vest.
pub fn draw_hands(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    if d.species == Species::Slime {
        return;
    }
    p.set_layer(Layer::Front);

    let hand = rig.hand_color().opaque();
    let sleeves = d.chest_style != 0 && d.chest_style != 5;
    let sleeve_c = d.chest_color.opaque();
    let hand_y = rig.anchors.hands.y;

    if rig.view == View::Side {
        let Some(lead) = rig.anchors.hands.leading else {
            return;
        };
        p.rect(lead.x, hand_y, ARM_WIDTH, ARM_HEIGHT, hand);
        if sleeves {
            p.rect(lead.x, hand_y, ARM_WIDTH, 4, sleeve_c);
        }
    } else {
        p.rect(8, hand_y, ARM_WIDTH, ARM_HEIGHT, hand);
        p.rect(21, hand_y, ARM_WIDTH, ARM_HEIGHT, hand);
        if sleeves {
            p.rect(8, hand_y, ARM_WIDTH, 4, sleeve_c);
            p.rect(21, hand_y, ARM_WIDTH, 4, sleeve_c);
        }
        // Round the inner bottom corners of the fists.
        p.erase_pixel(10, hand_y + 12);
        p.erase_pixel(21, hand_y + 12);
    }
}

fn draw_hair(p: &mut Painter, rig: &Rig<'_>, face: Point) {
    let d = rig.desc;
    if d.hair_style == 0 || d.helmet != 0 {
        return;
    }
    let hc = d.hair_color.opaque();
    let (fx, hy) = (face.x, face.y);

    // Long hair carries a mane behind the body.
    if d.hair_style == 2 {
        p.set_layer(Layer::Back);
        match rig.view {
            View::Front => {
                p.rect(fx - 1, hy + 2, 10, 12, hc);
                p.rect(fx - 2, hy + 8, 1, 6, hc);
                p.rect(fx + 9, hy + 8, 1, 6, hc);
            }
            View::Side => p.rect(fx + 3, hy + 2, 5, 12, hc),
            View::Back => p.rect(fx - 1, hy + 1, 10, 14, hc),
        }
    }

    p.set_layer(Layer::Front);
    match d.hair_style {
        // Short crop.
        1 => match rig.view {
            View::Front => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx, hy, 1, 4, hc);
                p.rect(fx + 7, hy, 1, 4, hc);
            }
            View::Side => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx + 4, hy, 4, 4, hc);
            }
            View::Back => p.rect(fx, hy, 8, 8, hc),
        },
        // Long: fringe on top of the mane drawn above.
        2 => match rig.view {
            View::Front => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx, hy + 2, 1, 2, hc);
                p.rect(fx + 7, hy + 2, 1, 2, hc);
            }
            View::Side => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx + 4, hy, 4, 2, hc);
            }
            View::Back => p.rect(fx, hy, 8, 4, hc),
        },
        // Spiky.
        3 => match rig.view {
            View::Front | View::Back => {
                p.rect(fx, hy, 8, 2, hc);
                for dx in [0, 2, 4, 6] {
                    p.pixel(fx + dx, hy - 1, hc);
                }
                if rig.view == View::Front {
                    p.rect(fx, hy, 1, 3, hc);
                    p.rect(fx + 7, hy, 1, 3, hc);
                } else {
                    p.rect(fx, hy, 8, 7, hc);
                }
            }
            View::Side => {
                p.rect(fx, hy, 8, 2, hc);
                for dx in [1, 3, 5] {
                    p.pixel(fx + dx, hy - 1, hc);
                }
                p.rect(fx + 5, hy, 3, 6, hc);
            }
        },
        // Bob.
        4 => match rig.view {
            View::Front => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx - 1, hy, 2, 4, hc);
                p.rect(fx + 7, hy, 2, 4, hc);
            }
            View::Side => {
                p.rect(fx, hy, 8, 2, hc);
                p.rect(fx + 2, hy, 6, 4, hc);
            }
            View::Back => p.rect(fx - 1, hy, 10, 7, hc),
        },
        // Mohawk.
        _ => match rig.view {
            View::Front | View::Back => p.rect(fx + 3, hy - 2, 2, 10, hc),
            View::Side => {
                p.rect(fx, hy - 2, 8, 2, hc);
                p.rect(fx + 6, hy, 2, 8, hc);
            }
        },
    }
}

fn draw_fangs(p: &mut Painter, rig: &Rig<'_>, face: Point) {
    if !rig.desc.has_fangs || rig.view != View::Front {
        return;
    }
    p.set_layer(Layer::Front);
    let white = colors::WHITE.opaque();
    p.pixel(face.x + 3, face.y + 8, white);
    p.pixel(face.x + 8, face.y + 8, white);
}

/// Face base, hair, eyes, and fangs. The face base lands on the body layer;
/// hair and eyes go on the front layer so they survive later overdraw.
pub fn draw_head(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    if d.species == Species::Slime {
        return;
    }

    let face = rig.anchors.head.top_left;
    let stencil = face_stencil(d.face_shape, rig.view);

    p.set_layer(Layer::Body);
    p.stamp(
        stencil,
        face.x,
        face.y,
        &[('F', rig.body_color().opaque())],
        StampOpts::default(),
    );

    draw_hair(p, rig, face);

    if rig.view != View::Back {
        p.set_layer(Layer::Front);
        if d.species == Species::Skeleton {
            // Fixed dark sockets; skeletons ignore the eye fields.
            let socket = colors::SLATE.opaque();
            match rig.view {
                View::Side => p.rect(12, rig.anchors.eyes.y, 2, 2, socket),
                _ => {
                    p.rect(rig.anchors.eyes.left.x, rig.anchors.eyes.y, 2, 2, socket);
                    if let Some(right) = rig.anchors.eyes.right {
                        p.rect(right.x - 1, rig.anchors.eyes.y, 2, 2, socket);
                    }
                }
            }
        } else {
            let iris = d.eye_color.opaque();
            match rig.view {
                View::Side => {
                    draw_eye_unit(p, face.x + 1, rig.anchors.eyes.y, d.eye_style, iris, true)
                }
                _ => draw_eye_pair(p, rig.anchors.eyes.left, d.eye_style, iris),
            }
        }
        draw_fangs(p, rig, face);
    }
}

/// The slime body: a squashing blob that replaces the entire humanoid
/// pipeline. The contact frame is tall, the passing frame squashes wider
/// and lower.
pub fn draw_slime_body(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    p.set_layer(Layer::Body);

    let squash = rig.phase == WalkPhase::Passing;
    let (x, y, w, h) = if squash { (7, 20, 18, 12) } else { (8, 18, 16, 14) };
    p.shaded_rect(x, y, w, h, d.skin_color, false);

    if rig.view != View::Back {
        p.set_layer(Layer::Front);
        draw_eye_pair(
            p,
            Point::new(x + 4, y + 4),
            d.eye_style,
            d.eye_color.opaque(),
        );
        if d.has_fangs {
            let white = colors::WHITE.opaque();
            p.pixel(x + 5, y + 8, white);
            p.pixel(x + 10, y + 8, white);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/body.rs"]
mod tests;
