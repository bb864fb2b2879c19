use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::character::model::{CharacterDescription, FaceShape, Species, domain};
use crate::character::palette;
use crate::foundation::core::Rgb;

// Presence odds for the "usually off" slots.
const MONSTER_PART_CHANCE: f64 = 0.3;
const FANG_CLAW_CHANCE: f64 = 0.2;

fn pick<R: Rng + ?Sized>(rng: &mut R, swatches: &[Rgb]) -> Rgb {
    // Palettes are non-empty constants; choose cannot fail.
    *swatches.choose(rng).unwrap_or(&Rgb::new(0xff, 0xff, 0xff))
}

fn maybe_part<R: Rng + ?Sized>(rng: &mut R, bound: u8) -> u8 {
    if rng.random_bool(MONSTER_PART_CHANCE) {
        rng.random_range(0..bound)
    } else {
        0
    }
}

/// Sample a fully-populated, always-valid [`CharacterDescription`].
///
/// Every style index is drawn uniformly from its own domain; colors come
/// from the curated palettes. Monster parts (horns, wings, tail) are present
/// with ~30% probability each, fangs and claws with ~20%, so random rolls
/// stay mostly humanoid. The result never needs clamping.
pub fn random_description<R: Rng + ?Sized>(rng: &mut R) -> CharacterDescription {
    let d = CharacterDescription {
        species: Species::from(rng.random_range(0..10u8)),
        face_shape: FaceShape::from(rng.random_range(0..4u8)),
        skin_color: pick(rng, palette::SKIN),
        hair_style: rng.random_range(0..domain::HAIR),
        hair_color: pick(rng, palette::HAIR),
        eye_style: rng.random_range(0..domain::EYES),
        eye_color: pick(rng, palette::EYES),
        chest_style: rng.random_range(0..domain::CHEST),
        chest_color: pick(rng, palette::OUTFIT),
        waist_style: rng.random_range(0..domain::WAIST),
        waist_color: pick(rng, palette::OUTFIT),
        leg_color: pick(rng, palette::OUTFIT),
        shoe_style: rng.random_range(0..domain::SHOES),
        shoe_color: pick(rng, palette::SHOES),
        head_accessory: rng.random_range(0..domain::HEAD_ACCESSORY),
        eye_accessory: rng.random_range(0..domain::EYE_ACCESSORY),
        ear_accessory: rng.random_range(0..domain::EAR_ACCESSORY),
        horns: maybe_part(rng, domain::HORNS),
        horn_color: pick(rng, palette::MONSTER),
        wings: maybe_part(rng, domain::WINGS),
        wing_color: pick(rng, palette::MONSTER),
        tail: maybe_part(rng, domain::TAIL),
        tail_color: pick(rng, palette::MONSTER),
        helmet: rng.random_range(0..domain::HELMET),
        helmet_color: pick(rng, palette::METAL),
        weapon: rng.random_range(0..domain::WEAPON),
        weapon_color: pick(rng, palette::METAL),
        shield: rng.random_range(0..domain::SHIELD),
        shield_color: pick(rng, palette::METAL),
        has_fangs: rng.random_bool(FANG_CLAW_CHANCE),
        has_claws: rng.random_bool(FANG_CLAW_CHANCE),
    };
    debug!(species = ?d.species, "rolled random character");
    d
}

#[cfg(test)]
#[path = "../../tests/unit/character/random.rs"]
mod tests;
