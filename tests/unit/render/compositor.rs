use super::*;

use crate::foundation::core::Rgb;
use crate::foundation::core::WalkPhase;
use crate::foundation::core::mirror_x;

fn params(direction: Direction, tier: FidelityTier) -> RenderParams {
    RenderParams {
        direction,
        tier,
        ..Default::default()
    }
}

fn frames_equal(a: &SpriteFrame, b: &SpriteFrame) -> bool {
    a.to_rgba8(1) == b.to_rgba8(1)
}

#[test]
fn rendering_is_deterministic() {
    let desc = CharacterDescription {
        species: Species::Demon,
        weapon: 1,
        shield: 2,
        wings: 1,
        ..Default::default()
    };
    for direction in [
        Direction::Front,
        Direction::Left,
        Direction::Right,
        Direction::Back,
    ] {
        let p = params(direction, FidelityTier::Dithered);
        let a = render(&desc, &p);
        let b = render(&desc, &p);
        assert!(frames_equal(&a, &b), "{direction:?}");
    }
}

#[test]
fn default_character_renders_centered_content() {
    let f = render(&CharacterDescription::default(), &RenderParams::default());
    assert!(f.opaque_pixel_count() > 100);
    let (x0, _, x1, _) = f.bounding_box().unwrap();
    let center = (x0 + x1) as i32;
    // Horizontal center within a pixel of the canvas center.
    assert!((center - (CANVAS - 1)).abs() <= 2, "center sum {center}");
}

#[test]
fn silhouette_is_identical_across_tiers() {
    let descs = [
        CharacterDescription::default(),
        CharacterDescription {
            species: Species::Slime,
            ..Default::default()
        },
        CharacterDescription {
            weapon: 1,
            shield: 1,
            helmet: 2,
            wings: 4,
            tail: 2,
            horns: 1,
            ..Default::default()
        },
    ];
    for desc in &descs {
        for direction in [Direction::Front, Direction::Left, Direction::Back] {
            let flat = render(desc, &params(direction, FidelityTier::Flat));
            let dith = render(desc, &params(direction, FidelityTier::Dithered));
            let grad = render(desc, &params(direction, FidelityTier::Gradient));
            assert_eq!(flat.alpha_mask(), dith.alpha_mask(), "{direction:?}");
            assert_eq!(dith.alpha_mask(), grad.alpha_mask(), "{direction:?}");
        }
    }
}

#[test]
fn right_facing_is_the_mirror_of_left_when_hands_are_empty() {
    let desc = CharacterDescription {
        weapon: 0,
        shield: 0,
        ..Default::default()
    };
    let left = render(&desc, &params(Direction::Left, FidelityTier::Dithered));
    let right = render(&desc, &params(Direction::Right, FidelityTier::Dithered));
    assert!(frames_equal(&left.mirrored(), &right));
}

#[test]
fn right_facing_swaps_weapon_and_shield_depth() {
    let desc = CharacterDescription {
        weapon: 1,
        shield: 3,
        ..Default::default()
    };
    let left = render(&desc, &params(Direction::Left, FidelityTier::Flat));
    let right = render(&desc, &params(Direction::Right, FidelityTier::Flat));
    // With held items the two facings are not plain mirrors.
    assert!(!frames_equal(&left.mirrored(), &right));

    // (15, 17) lies inside both the torso and the tower shield plate.
    // Left facing: the shield is in the near hand, so its darkened inner
    // plate covers the torso.
    assert_eq!(
        left.logical_pixel(15, 17),
        shade(desc.shield_color, -20).opaque()
    );
    // Right facing: the shield moves to the far hand and the torso hides
    // it; the mirrored pixel shows the chest garment instead.
    assert_eq!(
        right.logical_pixel(mirror_x(15), 17),
        desc.chest_color.opaque()
    );
}

#[test]
fn slime_suppresses_equipment_and_helmet() {
    let bare = CharacterDescription {
        species: Species::Slime,
        ..Default::default()
    };
    let loaded = CharacterDescription {
        species: Species::Slime,
        weapon: 1,
        shield: 2,
        helmet: 1,
        ..bare.clone()
    };
    for direction in [Direction::Front, Direction::Left, Direction::Back] {
        let a = render(&bare, &params(direction, FidelityTier::Dithered));
        let b = render(&loaded, &params(direction, FidelityTier::Dithered));
        assert!(frames_equal(&a, &b), "{direction:?}");
    }
}

#[test]
fn out_of_range_indices_render_like_their_clamped_form() {
    let wild = CharacterDescription {
        hair_style: 250,
        weapon: 99,
        helmet: 40,
        ..Default::default()
    };
    let a = render(&wild, &RenderParams::default());
    let b = render(&wild.normalized(), &RenderParams::default());
    assert!(frames_equal(&a, &b));
}

#[test]
fn gradient_tier_makes_spectral_species_translucent() {
    let ghost = CharacterDescription {
        species: Species::Ghost,
        ..Default::default()
    };
    let grad = render(&ghost, &params(Direction::Front, FidelityTier::Gradient));
    let flat = render(&ghost, &params(Direction::Front, FidelityTier::Flat));

    let translucent = grad
        .alpha_mask()
        .iter()
        .zip(grad.to_rgba8(1).chunks(4))
        .filter(|&(&on, px)| on && px[3] < 255)
        .count();
    assert!(translucent > 0);

    let flat_translucent = flat
        .to_rgba8(1)
        .chunks(4)
        .filter(|px| px[3] != 0 && px[3] < 255)
        .count();
    // Flat tier: only the ground shadow band is translucent.
    assert!(flat_translucent < translucent);
}

#[test]
fn humans_stay_opaque_at_the_gradient_tier() {
    let f = render(
        &CharacterDescription::default(),
        &params(Direction::Front, FidelityTier::Gradient),
    );
    for px in f.to_rgba8(1).chunks(4) {
        assert!(px[3] == 0 || px[3] == 255);
    }
}

#[test]
fn background_flood_fills_every_transparent_pixel() {
    let bg = Rgb::new(0x10, 0x20, 0x30);
    let p = RenderParams {
        background: Some(bg),
        ..Default::default()
    };
    let f = render(&CharacterDescription::default(), &p);
    let side = SpriteFrame::size();
    assert_eq!(f.opaque_pixel_count(), (side * side) as usize);
    assert_eq!(f.pixel(0, 0), bg.opaque());
}

#[test]
fn animation_phases_differ() {
    let desc = CharacterDescription::default();
    for direction in [Direction::Front, Direction::Left] {
        let contact = render(
            &desc,
            &RenderParams {
                direction,
                phase: WalkPhase::Contact,
                ..Default::default()
            },
        );
        let passing = render(
            &desc,
            &RenderParams {
                direction,
                phase: WalkPhase::Passing,
                ..Default::default()
            },
        );
        assert!(!frames_equal(&contact, &passing), "{direction:?}");
    }
}

#[test]
fn outline_darkens_edges_and_preserves_alpha() {
    let mut pm = Pixmap::new();
    let mid = Rgba::opaque(100, 140, 180);
    for y in 4..8 {
        for x in 4..10 {
            pm.put(x, y, mid);
        }
    }
    pm.put(20, 20, Rgba::new(100, 140, 180, 150));
    inner_outline(&mut pm);

    // Interior cell untouched, edge cell darkened.
    assert_eq!(pm.get(5, 5), mid);
    let edge = pm.get(9, 5);
    assert_eq!(edge.rgb(), shade(mid.rgb(), OUTLINE_DELTA));
    assert_eq!(edge.a, 255);
    // Translucent pixels keep their alpha when outlined.
    assert_eq!(pm.get(20, 20).a, 150);
}

#[test]
fn outline_spares_speculars_and_near_black() {
    let mut pm = Pixmap::new();
    let white = Rgba::opaque(250, 250, 250);
    let black = Rgba::opaque(10, 10, 10);
    pm.put(2, 2, white);
    pm.put(6, 6, black);
    inner_outline(&mut pm);
    assert_eq!(pm.get(2, 2), white);
    assert_eq!(pm.get(6, 6), black);
}

#[test]
fn outline_never_changes_the_mask() {
    let desc = CharacterDescription {
        weapon: 5,
        wings: 6,
        ..Default::default()
    };
    let f = render(&desc, &params(Direction::Front, FidelityTier::Flat));
    let g = render(&desc, &params(Direction::Front, FidelityTier::Gradient));
    assert_eq!(f.alpha_mask(), g.alpha_mask());
}
