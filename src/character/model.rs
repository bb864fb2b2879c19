use crate::foundation::core::Rgb;
use tracing::debug;

/// Race/species of the character.
///
/// Species drives conditional overrides throughout rendering (Slime replaces
/// the whole humanoid pipeline, Ghost floats, Skeleton ignores skin and eye
/// fields, some species force default monster parts).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub enum Species {
    /// Baseline humanoid.
    #[default]
    Human,
    /// Gelatinous blob; suppresses most humanoid slots.
    Slime,
    /// Bone-white base, fixed eye sockets, no shoes.
    Skeleton,
    /// Floating; inverted bob, wisp instead of legs, ground shadow.
    Ghost,
    /// Humanoid variant.
    Goblin,
    /// Humanoid variant; tail floors to the lizard tail.
    Lizardman,
    /// Humanoid variant; wings floor to the feathered wings.
    Birdman,
    /// Humanoid variant; horns floor to the demon horns.
    Demon,
    /// Humanoid variant.
    Elf,
    /// Humanoid variant.
    Dwarf,
}

impl From<u8> for Species {
    fn from(v: u8) -> Self {
        use Species::*;
        // Out-of-range discriminants from untrusted save data clamp to the
        // last variant rather than failing the load.
        match v {
            0 => Human,
            1 => Slime,
            2 => Skeleton,
            3 => Ghost,
            4 => Goblin,
            5 => Lizardman,
            6 => Birdman,
            7 => Demon,
            8 => Elf,
            9 => Dwarf,
            _ => {
                debug!(value = v, "clamping out-of-range species");
                Dwarf
            }
        }
    }
}

impl From<Species> for u8 {
    fn from(s: Species) -> u8 {
        s as u8
    }
}

/// Overall face silhouette, selecting a bitmap stencil (humanoid only).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub enum FaceShape {
    /// Standard rounded-top face.
    #[default]
    Normal,
    /// Rounded top and bottom.
    Round,
    /// Full square.
    Square,
    /// Narrow and tall.
    Long,
}

impl From<u8> for FaceShape {
    fn from(v: u8) -> Self {
        match v {
            0 => FaceShape::Normal,
            1 => FaceShape::Round,
            2 => FaceShape::Square,
            _ => {
                if v > 3 {
                    debug!(value = v, "clamping out-of-range face shape");
                }
                FaceShape::Long
            }
        }
    }
}

impl From<FaceShape> for u8 {
    fn from(s: FaceShape) -> u8 {
        s as u8
    }
}

/// Per-slot style-index domains (exclusive upper bounds).
///
/// Index 0 means "nothing drawn" for every optional slot; eye style has no
/// empty variant (a face always has eyes). Values outside a domain clamp to
/// the nearest valid variant instead of erroring.
pub mod domain {
    /// Hair styles: 0 None, 1 Short, 2 Long, 3 Spiky, 4 Bob, 5 Mohawk.
    pub const HAIR: u8 = 6;
    /// Eye styles (all drawn; no "none").
    pub const EYES: u8 = 6;
    /// Chest garments: 0 bare, 5 open vest.
    pub const CHEST: u8 = 6;
    /// Waist garments; 2 and 4 are skirts.
    pub const WAIST: u8 = 5;
    /// Shoes: 0 none, 1 shoes, 2 boots.
    pub const SHOES: u8 = 3;
    /// Head accessories: 0 none, 1 cat ears, 2 crown.
    pub const HEAD_ACCESSORY: u8 = 3;
    /// Eye accessories: glasses, sunglasses, monocle, scouter, eyepatch.
    pub const EYE_ACCESSORY: u8 = 6;
    /// Ear accessories: gold/silver/ruby/sapphire studs.
    pub const EAR_ACCESSORY: u8 = 5;
    /// Horn styles: nubs, curved, long, demon, antlers, unicorn.
    pub const HORNS: u8 = 7;
    /// Wing styles: bat, angel, fairy, dragon, butterfly, demon.
    pub const WINGS: u8 = 7;
    /// Tail styles: cat, devil, lizard, fluffy, stub.
    pub const TAIL: u8 = 6;
    /// Helmets: iron, viking, mage hat, hood.
    pub const HELMET: u8 = 5;
    /// Weapons: sword, staff, bow, spear, axe, dagger.
    pub const WEAPON: u8 = 7;
    /// Shields: buckler, kite, tower.
    pub const SHIELD: u8 = 4;
}

/// The full character description: the sole persisted/input entity.
///
/// Always fully populated — every field has a documented default, and save
/// blobs missing newer fields load with those defaults applied. Color fields
/// for a slot whose style index is 0 are inert but still stored (round-trip
/// fidelity). The render pipeline treats a description as a read-only
/// snapshot for the duration of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterDescription {
    /// Race/species.
    #[serde(rename = "baseType")]
    pub species: Species,
    /// Face silhouette (humanoid only).
    pub face_shape: FaceShape,
    /// Base skin tone.
    pub skin_color: Rgb,
    /// Hair style index (0 = bald).
    pub hair_style: u8,
    /// Hair color.
    pub hair_color: Rgb,
    /// Eye style index.
    pub eye_style: u8,
    /// Iris color.
    pub eye_color: Rgb,
    /// Chest garment style index (0 = bare).
    pub chest_style: u8,
    /// Chest garment color.
    pub chest_color: Rgb,
    /// Waist garment style index (0 = none).
    pub waist_style: u8,
    /// Waist garment color.
    pub waist_color: Rgb,
    /// Trouser/leg color (color-only slot).
    pub leg_color: Rgb,
    /// Shoe style index (0 = barefoot).
    pub shoe_style: u8,
    /// Shoe color.
    pub shoe_color: Rgb,
    /// Head accessory style index.
    #[serde(rename = "accessory")]
    pub head_accessory: u8,
    /// Eye accessory style index.
    pub eye_accessory: u8,
    /// Ear accessory style index.
    pub ear_accessory: u8,
    /// Horn style index (Demon floors this to the demon horns).
    pub horns: u8,
    /// Horn color; doubles as the claw/natural-weapon tint.
    pub horn_color: Rgb,
    /// Wing style index (Birdman floors this to the feathered wings).
    pub wings: u8,
    /// Wing color.
    pub wing_color: Rgb,
    /// Tail style index (Lizardman floors this to the lizard tail).
    pub tail: u8,
    /// Tail color (Lizardman tails use the skin color instead).
    pub tail_color: Rgb,
    /// Helmet style index; any non-zero helmet fully occludes hair.
    pub helmet: u8,
    /// Helmet color.
    pub helmet_color: Rgb,
    /// Weapon style index.
    pub weapon: u8,
    /// Weapon color (blade/head metal).
    pub weapon_color: Rgb,
    /// Shield style index.
    pub shield: u8,
    /// Shield color.
    pub shield_color: Rgb,
    /// Draw fangs under the face.
    pub has_fangs: bool,
    /// Tint hands/arms with the horn color instead of skin.
    pub has_claws: bool,
}

impl Default for CharacterDescription {
    fn default() -> Self {
        Self {
            species: Species::Human,
            face_shape: FaceShape::Normal,
            skin_color: Rgb::new(0xff, 0xdb, 0xac),
            hair_style: 1,
            hair_color: Rgb::new(0xe7, 0x4c, 0x3c),
            eye_style: 0,
            eye_color: Rgb::new(0x2c, 0x3e, 0x50),
            chest_style: 1,
            chest_color: Rgb::new(0x34, 0x98, 0xdb),
            waist_style: 1,
            waist_color: Rgb::new(0xf1, 0xc4, 0x0f),
            leg_color: Rgb::new(0x2c, 0x3e, 0x50),
            shoe_style: 1,
            shoe_color: Rgb::new(0x5d, 0x40, 0x37),
            head_accessory: 0,
            eye_accessory: 0,
            ear_accessory: 0,
            horns: 0,
            horn_color: Rgb::new(0xff, 0xff, 0xff),
            wings: 0,
            wing_color: Rgb::new(0xa2, 0x9b, 0xfe),
            tail: 0,
            tail_color: Rgb::new(0xa2, 0x9b, 0xfe),
            helmet: 0,
            helmet_color: Rgb::new(0xbd, 0xc3, 0xc7),
            weapon: 0,
            weapon_color: Rgb::new(0xbd, 0xc3, 0xc7),
            shield: 0,
            shield_color: Rgb::new(0xbd, 0xc3, 0xc7),
            has_fangs: false,
            has_claws: false,
        }
    }
}

impl CharacterDescription {
    /// Return a copy with every style index clamped into its valid domain.
    ///
    /// The compositor normalizes once per render so part renderers can index
    /// their variant tables without bounds checks. Descriptions loaded from
    /// untrusted storage may carry arbitrary indices; clamping (not
    /// erroring) is the documented recovery.
    pub fn normalized(&self) -> Self {
        let mut d = self.clone();
        for (name, field, bound) in [
            ("hairStyle", &mut d.hair_style, domain::HAIR),
            ("eyeStyle", &mut d.eye_style, domain::EYES),
            ("chestStyle", &mut d.chest_style, domain::CHEST),
            ("waistStyle", &mut d.waist_style, domain::WAIST),
            ("shoeStyle", &mut d.shoe_style, domain::SHOES),
            ("accessory", &mut d.head_accessory, domain::HEAD_ACCESSORY),
            ("eyeAccessory", &mut d.eye_accessory, domain::EYE_ACCESSORY),
            ("earAccessory", &mut d.ear_accessory, domain::EAR_ACCESSORY),
            ("horns", &mut d.horns, domain::HORNS),
            ("wings", &mut d.wings, domain::WINGS),
            ("tail", &mut d.tail, domain::TAIL),
            ("helmet", &mut d.helmet, domain::HELMET),
            ("weapon", &mut d.weapon, domain::WEAPON),
            ("shield", &mut d.shield, domain::SHIELD),
        ] {
            if *field >= bound {
                debug!(slot = name, value = *field, max = bound - 1, "clamping style index");
                *field = bound - 1;
            }
        }
        d
    }

    /// Whether every style index is already inside its domain.
    pub fn is_normalized(&self) -> bool {
        self == &self.normalized()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/model.rs"]
mod tests;
