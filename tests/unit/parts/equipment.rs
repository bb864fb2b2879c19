use super::*;

use crate::character::model::CharacterDescription;
use crate::foundation::core::{FidelityTier, WalkPhase};
use crate::layout::anchors::{Anchors, Motion};

fn rig(desc: &CharacterDescription, view: View, phase: WalkPhase) -> Rig<'_> {
    let motion = Motion::resolve(desc.species, phase);
    Rig {
        desc,
        view,
        phase,
        motion,
        anchors: Anchors::resolve(view, desc.species, motion),
        right_facing: false,
    }
}

fn painter() -> Painter {
    Painter::new(FidelityTier::Flat)
}

fn layer_is_empty(p: &Painter, layer: Layer) -> bool {
    let pm = p.pixmap(layer);
    for y in -8..40 {
        for x in -8..40 {
            if pm.get(x, y).a != 0 {
                return false;
            }
        }
    }
    true
}

const STEEL: Rgb = Rgb::new(0xbd, 0xc3, 0xc7);

#[test]
fn style_zero_weapon_draws_nothing() {
    let mut p = painter();
    draw_weapon(&mut p, 0, 9, 19, STEEL, false);
    for layer in Layer::ALL {
        assert!(layer_is_empty(&p, layer));
    }
}

#[test]
fn front_sword_splits_grip_and_blade_across_layers() {
    let mut p = painter();
    draw_weapon(&mut p, 1, 9, 19, STEEL, false);
    // Grip on the back layer so the fist covers it.
    assert!(!layer_is_empty(&p, Layer::Back));
    assert!(!layer_is_empty(&p, Layer::Front));
    // Blade rises above the guard on the front layer: ox=8, oy=20.
    assert_ne!(p.pixmap(Layer::Front).get(8, 12).a, 0);
    assert_eq!(p.pixmap(Layer::Front).get(8, 21).a, 0);
    assert_eq!(p.pixmap(Layer::Back).get(8, 21), colors::WOOD.opaque());
}

#[test]
fn side_weapon_stays_on_the_body_layer() {
    let mut p = painter();
    draw_weapon(&mut p, 1, 13, 19, STEEL, true);
    assert!(!layer_is_empty(&p, Layer::Body));
    assert!(layer_is_empty(&p, Layer::Front));
    assert!(layer_is_empty(&p, Layer::Back));
}

#[test]
fn every_weapon_style_paints_something() {
    for style in 1..7u8 {
        for side in [false, true] {
            let mut p = painter();
            draw_weapon(&mut p, style, 12, 19, STEEL, side);
            let any = Layer::ALL.iter().any(|&l| !layer_is_empty(&p, l));
            assert!(any, "style {style} side {side}");
        }
    }
}

#[test]
fn staff_carries_a_gem() {
    let mut p = painter();
    draw_weapon(&mut p, 2, 9, 19, STEEL, false);
    // ox=8, oy=20: gem at (9, 9).
    assert_eq!(p.pixmap(Layer::Front).get(9, 9), colors::RED_GEM.opaque());
}

#[test]
fn shield_draws_on_the_current_layer() {
    let mut p = painter();
    p.set_layer(Layer::Back);
    draw_shield(&mut p, 1, 14, 20, STEEL);
    assert!(!layer_is_empty(&p, Layer::Back));
    assert!(layer_is_empty(&p, Layer::Front));

    let mut p = painter();
    p.set_layer(Layer::Front);
    draw_shield(&mut p, 2, 23, 20, STEEL);
    assert!(!layer_is_empty(&p, Layer::Front));
    assert!(layer_is_empty(&p, Layer::Back));
}

#[test]
fn tower_shield_is_the_widest() {
    let span = |style: u8| {
        let mut p = painter();
        p.set_layer(Layer::Front);
        draw_shield(&mut p, style, 16, 16, STEEL);
        let pm = p.pixmap(Layer::Front);
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for y in 0..32 {
            for x in 0..32 {
                if pm.get(x, y).a != 0 {
                    min = min.min(x);
                    max = max.max(x);
                }
            }
        }
        max - min + 1
    };
    assert!(span(3) > span(2));
    assert!(span(2) > span(1));
}

#[test]
fn helmet_skips_slimes() {
    let desc = CharacterDescription {
        species: Species::Slime,
        helmet: 1,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_helmet(&mut p, &r);
    assert!(layer_is_empty(&p, Layer::Front));
}

#[test]
fn every_helmet_covers_the_hairline() {
    for style in 1..5u8 {
        for view in [View::Front, View::Side, View::Back] {
            let desc = CharacterDescription {
                helmet: style,
                ..Default::default()
            };
            let r = rig(&desc, view, WalkPhase::Contact);
            let mut p = painter();
            draw_helmet(&mut p, &r);
            let head_y = r.anchors.head.top_left.y;
            // A pixel on the crown row is always painted.
            assert_ne!(
                p.pixmap(Layer::Front).get(14, head_y - 1).a,
                0,
                "style {style} view {view:?}"
            );
        }
    }
}

#[test]
fn hood_shades_the_face_opening() {
    let desc = CharacterDescription {
        helmet: 4,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_helmet(&mut p, &r);
    let head_y = r.anchors.head.top_left.y;
    let opening = p.pixmap(Layer::Front).get(14, head_y + 3);
    let brim = p.pixmap(Layer::Front).get(9, head_y + 3);
    assert_eq!(brim, desc.helmet_color.opaque());
    assert_ne!(opening, desc.helmet_color.opaque());
    assert_eq!(opening.a, 255);
}

#[test]
fn crown_is_gold_and_cat_ears_use_the_hair_color() {
    let crown = CharacterDescription {
        head_accessory: 2,
        ..Default::default()
    };
    let r = rig(&crown, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_head_accessory(&mut p, &r);
    let head_y = r.anchors.head.top_left.y;
    assert_eq!(p.pixmap(Layer::Front).get(12, head_y - 3), colors::GOLD.opaque());

    let ears = CharacterDescription {
        head_accessory: 1,
        ..Default::default()
    };
    let r = rig(&ears, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_head_accessory(&mut p, &r);
    assert_eq!(
        p.pixmap(Layer::Front).get(11, head_y - 3),
        ears.hair_color.opaque()
    );
}

#[test]
fn eye_accessories_skip_the_back_view() {
    for style in 1..6u8 {
        let desc = CharacterDescription {
            eye_accessory: style,
            ..Default::default()
        };
        let r = rig(&desc, View::Back, WalkPhase::Contact);
        let mut p = painter();
        draw_eye_accessory(&mut p, &r);
        assert!(layer_is_empty(&p, Layer::Front), "style {style}");
    }
}

#[test]
fn glasses_are_translucent_over_the_eyes() {
    let desc = CharacterDescription {
        eye_accessory: 1,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_eye_accessory(&mut p, &r);
    let eye_y = r.anchors.head.top_left.y + 5;
    let lens = p.pixmap(Layer::Front).get(12, eye_y + 1);
    assert_eq!(lens, colors::GLASS);
    // Bridge between the lenses.
    assert_eq!(p.pixmap(Layer::Front).get(15, eye_y + 1), colors::DARK_GRAY.opaque());
}

#[test]
fn eyepatch_is_deliberately_asymmetric() {
    let desc = CharacterDescription {
        eye_accessory: 5,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_eye_accessory(&mut p, &r);
    let eye_y = r.anchors.head.top_left.y + 5;
    let pm = p.pixmap(Layer::Front);
    // Patch side fully covered, strap side only a faint band.
    assert_eq!(pm.get(18, eye_y).a, 255);
    assert!(pm.get(12, eye_y).a < 255);
}

#[test]
fn monocle_vanishes_in_profile() {
    let desc = CharacterDescription {
        eye_accessory: 3,
        ..Default::default()
    };
    let r = rig(&desc, View::Side, WalkPhase::Contact);
    let mut p = painter();
    draw_eye_accessory(&mut p, &r);
    assert!(layer_is_empty(&p, Layer::Front));
}

#[test]
fn slime_eyewear_shifts_onto_the_blob() {
    let desc = CharacterDescription {
        species: Species::Slime,
        eye_accessory: 2,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_eye_accessory(&mut p, &r);
    let pm = p.pixmap(Layer::Front);
    // head_y 18, eye_y 22, lenses pulled 4 columns inward.
    assert_ne!(pm.get(15, 22).a, 0);
    assert_eq!(pm.get(11, 22).a, 0);
}

#[test]
fn ear_studs_pick_their_metal() {
    for (style, c) in [
        (1u8, colors::GOLD),
        (2, colors::SILVER),
        (3, colors::RED_GEM),
        (4, colors::BLUE_GEM),
    ] {
        let desc = CharacterDescription {
            ear_accessory: style,
            ..Default::default()
        };
        let r = rig(&desc, View::Front, WalkPhase::Contact);
        let mut p = painter();
        draw_ear_accessory(&mut p, &r);
        let head_y = r.anchors.head.top_left.y;
        assert_eq!(p.pixmap(Layer::Front).get(9, head_y + 7), c.opaque());
        assert_eq!(p.pixmap(Layer::Front).get(22, head_y + 7), c.opaque());
    }
}

#[test]
fn full_helmets_hide_ear_studs() {
    for helmet in [1u8, 2, 4] {
        let desc = CharacterDescription {
            ear_accessory: 1,
            helmet,
            ..Default::default()
        };
        let r = rig(&desc, View::Front, WalkPhase::Contact);
        let mut p = painter();
        draw_ear_accessory(&mut p, &r);
        assert!(layer_is_empty(&p, Layer::Front), "helmet {helmet}");
    }
    // The mage hat leaves the ears exposed.
    let desc = CharacterDescription {
        ear_accessory: 1,
        helmet: 3,
        ..Default::default()
    };
    let r = rig(&desc, View::Front, WalkPhase::Contact);
    let mut p = painter();
    draw_ear_accessory(&mut p, &r);
    assert!(!layer_is_empty(&p, Layer::Front));
}

#[test]
fn skeletons_and_slimes_wear_no_ear_studs() {
    for species in [Species::Skeleton, Species::Slime] {
        let desc = CharacterDescription {
            species,
            ear_accessory: 2,
            ..Default::default()
        };
        let r = rig(&desc, View::Front, WalkPhase::Contact);
        let mut p = painter();
        draw_ear_accessory(&mut p, &r);
        assert!(layer_is_empty(&p, Layer::Front), "{species:?}");
    }
}
