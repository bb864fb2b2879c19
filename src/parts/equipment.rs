//! Equipment: weapons, shields, helmets, and the three accessory slots.
//!
//! Weapons and shields are placed by the compositor (their grip point moves
//! with the hands and the facing direction); everything else reads the head
//! anchor directly.

use crate::character::model::Species;
use crate::foundation::color::shade;
use crate::foundation::core::{Rgb, Rgba};
use crate::layout::anchors::View;
use crate::parts::{Rig, colors};
use crate::surface::pixmap::{Layer, Painter};

/// Draw a weapon with its grip at `(x, y)`.
///
/// Side views tuck the whole weapon behind the hand on the body layer. In
/// front views the blade rides the front layer while the sword's guard and
/// grip drop to the back layer, so the fist reads as wrapped around it.
pub fn draw_weapon(p: &mut Painter, style: u8, x: i32, y: i32, color: Rgb, side_view: bool) {
    if style == 0 {
        return;
    }
    p.set_layer(if side_view { Layer::Body } else { Layer::Front });

    let (ox, oy) = if side_view { (x - 3, y - 1) } else { (x - 1, y + 1) };
    let gold = colors::GOLD.opaque();
    let wood = colors::WOOD.opaque();

    match style {
        // Sword.
        1 => {
            if side_view {
                p.shaded_rect(ox, oy - 10, 2, 10, color, true);
                p.rect(ox - 2, oy, 6, 1, gold);
                p.rect(ox, oy + 1, 2, 2, wood);
            } else {
                p.set_layer(Layer::Back);
                p.rect(ox - 2, oy, 6, 1, gold);
                p.rect(ox, oy + 1, 2, 2, wood);

                p.set_layer(Layer::Front);
                p.shaded_rect(ox, oy - 10, 2, 10, color, true);
                p.rect(ox - 2, oy, 6, 1, gold);
            }
        }
        // Staff.
        2 => {
            p.rect(ox, oy - 10, 2, 14, wood);
            p.rect(ox - 1, oy - 12, 4, 3, gold);
            p.pixel(ox + 1, oy - 11, colors::RED_GEM.opaque());
        }
        // Bow.
        3 => {
            p.rect(ox + 1, oy - 6, 1, 12, wood);
            p.pixel(ox, oy - 5, wood);
            p.pixel(ox, oy + 5, wood);
            p.pixel(ox - 1, oy - 4, wood);
            p.pixel(ox - 1, oy + 4, wood);
            p.rect(ox - 1, oy - 3, 1, 6, colors::WHITE.opaque());
        }
        // Spear.
        4 => {
            p.rect(ox, oy - 12, 1, 16, wood);
            p.shaded_rect(ox - 1, oy - 15, 3, 3, color, true);
            p.pixel(ox, oy - 16, color.opaque());
        }
        // Axe.
        5 => {
            p.rect(ox, oy - 6, 2, 10, wood);
            p.shaded_rect(ox + 2, oy - 7, 3, 6, color, true);
            p.shaded_rect(ox - 3, oy - 7, 3, 6, color, true);
        }
        // Dagger.
        _ => {
            p.shaded_rect(ox, oy - 4, 2, 4, color, true);
            p.rect(ox - 1, oy, 4, 1, gold);
            p.rect(ox, oy + 1, 2, 1, wood);
        }
    }
}

/// Draw a shield centered on the arm at `(x, y)`, on the current layer (the
/// compositor picks the back or front layer by slot).
pub fn draw_shield(p: &mut Painter, style: u8, x: i32, y: i32, color: Rgb) {
    if style == 0 {
        return;
    }
    let gold = colors::GOLD.opaque();
    match style {
        // Buckler.
        1 => {
            p.shaded_rect(x - 1, y - 2, 6, 6, color, true);
            p.pixel(x + 1, y + 1, gold);
        }
        // Kite shield.
        2 => {
            p.shaded_rect(x - 2, y - 2, 8, 5, color, true);
            p.rect(x - 1, y + 3, 6, 2, color.opaque());
            p.rect(x, y + 5, 4, 2, color.opaque());
            p.rect(x - 2, y - 2, 8, 1, gold);
            p.pixel(x + 2, y + 2, gold);
        }
        // Tower shield.
        _ => {
            p.shaded_rect(x - 3, y - 4, 10, 12, color, true);
            p.rect(x - 2, y - 3, 8, 10, shade(color, -20).opaque());
        }
    }
}

/// Helmet on the front layer. A non-zero helmet also suppresses hair, but
/// that rule lives in the hair renderer.
pub fn draw_helmet(p: &mut Painter, rig: &Rig<'_>) {
    let style = rig.desc.helmet;
    if style == 0 || rig.desc.species == Species::Slime {
        return;
    }
    p.set_layer(Layer::Front);

    let color = rig.desc.helmet_color;
    let head_y = rig.anchors.head.top_left.y;
    let white = colors::WHITE.opaque();

    match rig.view {
        View::Front => match style {
            // Iron helm with a visor slit.
            1 => {
                p.shaded_rect(9, head_y - 3, 14, 6, color, true);
                p.rect(15, head_y - 4, 2, 9, colors::SLATE.opaque());
            }
            // Viking: banded dome with horns.
            2 => {
                p.shaded_rect(9, head_y - 2, 14, 4, color, true);
                p.rect(8, head_y - 4, 2, 4, white);
                p.rect(22, head_y - 4, 2, 4, white);
            }
            // Mage hat.
            3 => {
                p.rect(7, head_y - 1, 18, 2, color.opaque());
                p.rect(10, head_y - 8, 12, 7, color.opaque());
                p.rect(12, head_y - 12, 8, 4, color.opaque());
            }
            // Hood with a shaded opening.
            _ => {
                p.rect(8, head_y - 3, 16, 13, color.opaque());
                p.rect(11, head_y, 10, 8, Rgba::new(0, 0, 0, 77));
            }
        },
        View::Side => match style {
            1 => p.shaded_rect(10, head_y - 3, 12, 6, color, true),
            2 => {
                p.shaded_rect(10, head_y - 2, 12, 4, color, true);
                p.rect(12, head_y - 4, 2, 4, white);
            }
            3 => {
                p.rect(9, head_y - 1, 14, 2, color.opaque());
                p.rect(11, head_y - 8, 10, 7, color.opaque());
                p.rect(13, head_y - 12, 6, 4, color.opaque());
            }
            _ => {
                p.rect(10, head_y - 3, 13, 13, color.opaque());
                p.rect(10, head_y + 1, 2, 6, shade(color, -30).opaque());
            }
        },
        View::Back => match style {
            1 => p.shaded_rect(9, head_y - 3, 14, 10, color, true),
            2 => p.shaded_rect(9, head_y - 2, 14, 8, color, true),
            3 => {
                p.rect(7, head_y - 1, 18, 2, color.opaque());
                p.rect(10, head_y - 8, 12, 7, color.opaque());
            }
            _ => p.rect(8, head_y - 3, 16, 14, color.opaque()),
        },
    }
}

/// Head accessory (cat ears use the hair color; the crown is gold).
pub fn draw_head_accessory(p: &mut Painter, rig: &Rig<'_>) {
    let style = rig.desc.head_accessory;
    if style == 0 {
        return;
    }
    p.set_layer(Layer::Front);

    let slime = rig.desc.species == Species::Slime;
    let sy = if slime { -4 } else { 0 };
    let sx = if slime && rig.view == View::Side { 4 } else { 0 };
    let head_y = rig.anchors.head.top_left.y + sy;
    let gold = colors::GOLD.opaque();

    match style {
        1 => {
            let hc = rig.desc.hair_color.opaque();
            if rig.view == View::Side {
                p.pixel(12 + sx, head_y - 3, hc);
                p.pixel(11 + sx, head_y - 2, hc);
            } else {
                p.pixel(11, head_y - 3, hc);
                p.pixel(10, head_y - 2, hc);
                p.pixel(20, head_y - 3, hc);
                p.pixel(21, head_y - 2, hc);
            }
        }
        _ => {
            if rig.view == View::Side {
                p.rect(11 + sx, head_y - 4, 8, 2, gold);
                p.pixel(11 + sx, head_y - 5, gold);
                p.pixel(14 + sx, head_y - 5, gold);
            } else {
                p.rect(11, head_y - 4, 10, 2, gold);
                p.pixel(11, head_y - 5, gold);
                p.pixel(15, head_y - 5, gold);
                p.pixel(20, head_y - 5, gold);
            }
        }
    }
}

/// Eye accessory. Not drawn from behind; slimes shift everything onto the
/// blob's face. The eyepatch is the one deliberately asymmetric accessory.
pub fn draw_eye_accessory(p: &mut Painter, rig: &Rig<'_>) {
    let style = rig.desc.eye_accessory;
    if style == 0 || rig.view == View::Back {
        return;
    }
    p.set_layer(Layer::Front);

    let slime = rig.desc.species == Species::Slime;
    let head_y = rig.anchors.head.top_left.y;
    let eye_y = head_y + if slime { 4 } else { 5 };
    let frame = colors::DARK_GRAY.opaque();
    let black = Rgba::opaque(0, 0, 0);
    let s_off = if slime { 4 } else { 0 };

    if rig.view == View::Front {
        match style {
            // Glasses.
            1 => {
                p.rect(11 + s_off, eye_y, 4, 3, colors::GLASS);
                p.rect(11 + s_off, eye_y, 4, 1, frame);
                p.rect(17 - s_off, eye_y, 4, 3, colors::GLASS);
                p.rect(17 - s_off, eye_y, 4, 1, frame);
                p.rect(15, eye_y + 1, 2, 1, frame);
            }
            // Sunglasses.
            2 => {
                p.rect(11 + s_off, eye_y, 4, 3, black);
                p.rect(17 - s_off, eye_y, 4, 3, black);
                p.rect(15, eye_y + 1, 2, 1, black);
            }
            // Monocle.
            3 => {
                let gold = colors::GOLD.opaque();
                p.rect(17 - s_off, eye_y, 4, 3, colors::GLASS);
                p.rect(17 - s_off, eye_y, 4, 1, gold);
                p.rect(17 - s_off, eye_y + 2, 4, 1, gold);
                p.rect(17 - s_off, eye_y, 1, 3, gold);
                p.rect(20 - s_off, eye_y, 1, 3, gold);
            }
            // Scouter.
            4 => {
                let arm = Rgba::opaque(0x55, 0x55, 0x55);
                p.rect(11 + s_off, eye_y, 4, 2, colors::GLASS_RED);
                p.rect(10 + s_off, eye_y, 1, 4, arm);
                p.rect(9 + s_off, head_y + 3, 1, 4, arm);
            }
            // Eyepatch over the right eye with a strap shadow.
            _ => {
                p.rect(17 - s_off, eye_y, 4, 2, frame);
                p.rect(18 - s_off, eye_y, 2, 1, black);
                p.pixel(16 - s_off, eye_y + 1, frame);
                p.rect(11 + s_off, eye_y, 4, 1, Rgba::new(0, 0, 0, 77));
            }
        }
    } else {
        let sv = if slime { 4 } else { 0 };
        let eye_x = 11 + sv;
        match style {
            1 => {
                p.rect(eye_x, eye_y, 3, 3, colors::GLASS);
                p.rect(eye_x, eye_y, 3, 1, frame);
                p.rect(eye_x - 1, eye_y, 1, 1, frame);
            }
            2 => {
                p.rect(eye_x, eye_y, 3, 3, black);
                p.rect(eye_x - 1, eye_y, 1, 1, black);
            }
            // The monocle sits on the hidden eye in profile.
            3 => {}
            4 => {
                p.rect(eye_x, eye_y, 3, 2, colors::GLASS_RED);
                p.rect(10 + sv, head_y + 4, 2, 2, Rgba::opaque(0x55, 0x55, 0x55));
            }
            _ => {
                p.rect(eye_x, eye_y, 3, 2, frame);
                p.rect(eye_x - 1, eye_y, 1, 1, frame);
            }
        }
    }
}

/// Ear studs. Hidden by full helmets and absent on slimes and skeletons.
pub fn draw_ear_accessory(p: &mut Painter, rig: &Rig<'_>) {
    let style = rig.desc.ear_accessory;
    if style == 0
        || rig.view == View::Back
        || matches!(rig.desc.species, Species::Slime | Species::Skeleton)
        || matches!(rig.desc.helmet, 1 | 2 | 4)
    {
        return;
    }
    p.set_layer(Layer::Front);

    let c = match style {
        2 => colors::SILVER,
        3 => colors::RED_GEM,
        4 => colors::BLUE_GEM,
        _ => colors::GOLD,
    }
    .opaque();
    let head_y = rig.anchors.head.top_left.y;

    if rig.view == View::Side {
        p.pixel(10, head_y + 7, c);
    } else {
        p.pixel(9, head_y + 7, c);
        p.pixel(22, head_y + 7, c);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/equipment.rs"]
mod tests;
