//! The frame driver: one render call takes a character description plus
//! view parameters and produces a flattened [`SpriteFrame`].
//!
//! A render is a strict linear sequence with no retained state: normalize,
//! resolve motion and anchors, invoke part renderers in z-critical order,
//! flatten, post-process, mirror if right-facing, then flood the optional
//! background. Buffers are created fresh per call; nothing is cached.

use tracing::debug;

use crate::character::model::{CharacterDescription, Species};
use crate::foundation::color::shade;
use crate::foundation::core::{CANVAS, Direction, FidelityTier, MARGIN, Rgba};
use crate::layout::anchors::{Anchors, Motion, View};
use crate::parts::{Rig, body, equipment, monster};
use crate::render::frame::{RenderParams, SpriteFrame};
use crate::surface::pixmap::{Layer, Painter, Pixmap};

/// Translucency applied to gelatinous/spectral species at the gradient tier.
const SPECTRAL_ALPHA: f32 = 0.8;

/// Outline darkening step.
const OUTLINE_DELTA: i16 = -40;

/// Render one frame.
///
/// Out-of-range style indices are clamped up front, so no part renderer can
/// fail; the call always produces a frame.
pub fn render(desc: &CharacterDescription, params: &RenderParams) -> SpriteFrame {
    let desc = desc.normalized();
    debug!(
        species = ?desc.species,
        direction = ?params.direction,
        phase = ?params.phase,
        tier = ?params.tier,
        "rendering frame"
    );

    let view = View::from(params.direction);
    let right_facing = params.direction == Direction::Right;
    let motion = Motion::resolve(desc.species, params.phase);
    let rig = Rig {
        desc: &desc,
        view,
        phase: params.phase,
        motion,
        anchors: Anchors::resolve(view, desc.species, motion),
        right_facing,
    };

    let mut p = Painter::new(params.tier);
    draw_parts(&mut p, &rig);

    let mut out = p.flatten();
    if params.tier == FidelityTier::Gradient
        && matches!(desc.species, Species::Slime | Species::Ghost)
    {
        scale_alpha(&mut out, SPECTRAL_ALPHA);
    }
    if params.tier != FidelityTier::Gradient {
        inner_outline(&mut out);
    }
    if right_facing {
        out.mirror_horizontal();
    }
    if let Some(bg) = params.background {
        flood_background(&mut out, bg.opaque());
    }
    SpriteFrame::new(out)
}

/// The mandated part order. Within one layer, later calls paint over
/// earlier ones, so this sequence is a correctness contract: the far-hand
/// weapon must precede the body, the body must precede hands and helmets.
fn draw_parts(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    let slime = d.species == Species::Slime;
    let side = rig.view == View::Side;

    body::draw_ground_shadow(p, rig);

    monster::draw_wings(p, rig, true);
    monster::draw_tail(p, rig, true);
    if !slime {
        draw_far_equipment(p, rig);
    }

    p.set_layer(Layer::Body);
    if slime {
        body::draw_slime_body(p, rig);
    } else {
        body::draw_body(p, rig);
        body::draw_head(p, rig);
    }

    if !slime {
        monster::draw_wings(p, rig, false);
        monster::draw_tail(p, rig, false);
    }

    monster::draw_horns(p, rig);
    equipment::draw_eye_accessory(p, rig);
    equipment::draw_ear_accessory(p, rig);
    equipment::draw_head_accessory(p, rig);
    equipment::draw_helmet(p, rig);

    body::draw_hands(p, rig);

    if !slime {
        draw_near_equipment(p, rig, side);
    }
}

/// Weapon/shield in the far hand, occluded by the body. Side views swap
/// which item is far depending on the final facing; the back view shows
/// both slung across the back.
fn draw_far_equipment(p: &mut Painter, rig: &Rig<'_>) {
    let d = rig.desc;
    let item_y = rig.anchors.hands.y + rig.motion.item_bob;
    match rig.view {
        View::Side => {
            if rig.right_facing {
                p.set_layer(Layer::Back);
                equipment::draw_shield(
                    p,
                    d.shield,
                    14 + rig.motion.walk_offset,
                    item_y,
                    d.shield_color,
                );
            } else {
                equipment::draw_weapon(p, d.weapon, 13, item_y, d.weapon_color, true);
            }
        }
        View::Back => {
            equipment::draw_weapon(p, d.weapon, 23, item_y, d.weapon_color, true);
            p.set_layer(Layer::Back);
            equipment::draw_shield(p, d.shield, 9, item_y, d.shield_color);
        }
        View::Front => {}
    }
}

/// Weapon/shield in the near hand, in front of the body.
fn draw_near_equipment(p: &mut Painter, rig: &Rig<'_>, side: bool) {
    let d = rig.desc;
    let item_y = rig.anchors.hands.y + rig.motion.item_bob;
    if side {
        if rig.right_facing {
            equipment::draw_weapon(
                p,
                d.weapon,
                12 + rig.motion.walk_offset,
                item_y,
                d.weapon_color,
                true,
            );
        } else {
            p.set_layer(Layer::Front);
            equipment::draw_shield(
                p,
                d.shield,
                12 + rig.motion.walk_offset,
                item_y,
                d.shield_color,
            );
        }
    } else if rig.view == View::Front {
        equipment::draw_weapon(p, d.weapon, 9, item_y, d.weapon_color, false);
        p.set_layer(Layer::Front);
        equipment::draw_shield(p, d.shield, 23, item_y, d.shield_color);
    }
}

fn scale_alpha(pm: &mut Pixmap, factor: f32) {
    for y in -MARGIN..CANVAS - MARGIN {
        for x in -MARGIN..CANVAS - MARGIN {
            let px = pm.get(x, y);
            if px.a != 0 {
                pm.put(x, y, px.alpha_scaled(factor));
            }
        }
    }
}

/// Darken every opaque pixel whose right or bottom neighbor is transparent,
/// carving a 1px inner outline without growing the silhouette. Near-white
/// pixels (specular highlights) and near-black pixels (already the darkest
/// ramp step) are left alone.
fn inner_outline(pm: &mut Pixmap) {
    let src = pm.clone();
    for y in -MARGIN..CANVAS - MARGIN {
        for x in -MARGIN..CANVAS - MARGIN {
            let px = src.get(x, y);
            if px.a == 0 {
                continue;
            }
            let edge = src.get(x + 1, y).a == 0 || src.get(x, y + 1).a == 0;
            if !edge {
                continue;
            }
            let avg = (u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3;
            if avg >= 240 || avg <= 24 {
                continue;
            }
            let dark = shade(px.rgb(), OUTLINE_DELTA);
            pm.put(x, y, dark.with_alpha(px.a));
        }
    }
}

fn flood_background(pm: &mut Pixmap, bg: Rgba) {
    for y in -MARGIN..CANVAS - MARGIN {
        for x in -MARGIN..CANVAS - MARGIN {
            pm.put(x, y, pm.get(x, y).over(bg));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
