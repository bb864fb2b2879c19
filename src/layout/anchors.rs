use crate::character::model::Species;
use crate::foundation::core::{Direction, GRID, WalkPhase, clamp_i32, mirror_x};

/// A logical grid point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Logical x.
    pub x: i32,
    /// Logical y.
    pub y: i32,
}

impl Point {
    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn clamped(self) -> Self {
        Self {
            x: clamp_i32(self.x, 0, GRID - 1),
            y: clamp_i32(self.y, 0, GRID - 1),
        }
    }
}

/// The distinct art pipelines. `Direction::Right` shares the side pipeline
/// with `Direction::Left` and is mirrored afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Facing the viewer.
    #[default]
    Front,
    /// Side profile (drawn facing left).
    Side,
    /// Facing away.
    Back,
}

impl From<Direction> for View {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Front => View::Front,
            Direction::Left | Direction::Right => View::Side,
            Direction::Back => View::Back,
        }
    }
}

/// Per-frame animation offsets, derived from species and walk phase.
///
/// Humanoids bob down one pixel on the passing frame and swing limbs by
/// `walk_offset`. Ghosts float: the bob inverts (up on contact) and limbs
/// stay still. Slimes ignore all of this and squash instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    /// Whole-body vertical offset.
    pub y_offset: i32,
    /// Limb swing offset (`-1` or `1` for humanoids, `0` for ghosts).
    pub walk_offset: i32,
    /// Extra vertical bob applied to held items.
    pub item_bob: i32,
}

impl Motion {
    /// Resolve the animation offsets for one frame.
    pub fn resolve(species: Species, phase: WalkPhase) -> Self {
        let passing = phase == WalkPhase::Passing;
        match species {
            Species::Slime => Motion {
                y_offset: 0,
                walk_offset: 0,
                item_bob: 0,
            },
            Species::Ghost => Motion {
                y_offset: if passing { 1 } else { -1 },
                walk_offset: 0,
                item_bob: if passing { 1 } else { 0 },
            },
            _ => Motion {
                y_offset: if passing { 1 } else { 0 },
                walk_offset: if passing { 1 } else { -1 },
                item_bob: if passing { 1 } else { 0 },
            },
        }
    }
}

/// Eye placement. Side views draw a single eye; front/back views carry a
/// canonical left eye whose partner is derived by mirroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EyeAnchor {
    /// Row the eyes sit on.
    pub y: i32,
    /// Left (or sole) eye center.
    pub left: Point,
    /// Mirrored right eye center; `None` in side views.
    pub right: Option<Point>,
}

/// A block anchor: placement corner plus visual center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockAnchor {
    /// Top-left placement corner.
    pub top_left: Point,
    /// Visual center.
    pub center: Point,
}

/// Leg placement (outer pair in front/back views, near/far pair in side
/// views where `walk_offset` splays them).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegAnchor {
    /// Left (viewer's left) leg top-left.
    pub left: Point,
    /// Right leg top-left.
    pub right: Point,
}

/// Hand placement. Front/back views place both hands; side views place one
/// leading hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandAnchor {
    /// Left hand top-left (front/back views).
    pub left: Option<Point>,
    /// Right hand top-left (front/back views).
    pub right: Option<Point>,
    /// Leading hand top-left (side views).
    pub leading: Option<Point>,
    /// Row hands (and held items) sit on.
    pub y: i32,
}

/// Every placement coordinate one frame needs, derived once per render.
///
/// Part renderers never hardcode positions: they read anchors, so a change
/// to the rig's proportions lands in exactly one place. All points are
/// clamped into the logical grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchors {
    /// Head block.
    pub head: BlockAnchor,
    /// Eye placement.
    pub eyes: EyeAnchor,
    /// Torso block.
    pub torso: BlockAnchor,
    /// Pelvis/waist block.
    pub pelvis: BlockAnchor,
    /// Leg pair.
    pub legs: LegAnchor,
    /// Hands.
    pub hands: HandAnchor,
}

/// Canonical left-eye column in front/back views.
pub const FRONT_EYE_X: i32 = 13;

impl Anchors {
    /// Resolve all anchors for one frame.
    ///
    /// Baselines are fixed rig constants (head row 3, chest 14, waist 19,
    /// legs 24, hands 19) shifted by the motion bob; slimes drop the head
    /// baseline to row 18 since the blob has no separate body.
    pub fn resolve(view: View, species: Species, motion: Motion) -> Self {
        let head_y = if species == Species::Slime { 18 } else { 3 } + motion.y_offset;
        let chest_y = 14 + motion.y_offset;
        let waist_y = 19 + motion.y_offset;
        let leg_y = 24 + motion.y_offset;
        let hand_y = 19 + motion.y_offset;
        let side = view == View::Side;

        let head_top_left = Point::new(if side { 11 } else { 10 }, head_y);
        let eye_y = head_y + 5;

        let eyes = if side {
            EyeAnchor {
                y: eye_y,
                left: Point::new(11, eye_y).clamped(),
                right: None,
            }
        } else {
            EyeAnchor {
                y: eye_y,
                left: Point::new(FRONT_EYE_X, eye_y).clamped(),
                right: Some(Point::new(mirror_x(FRONT_EYE_X), eye_y).clamped()),
            }
        };

        let torso_x = if side { 13 } else { 11 };
        let legs = if side {
            LegAnchor {
                left: Point::new(13 - motion.walk_offset, leg_y).clamped(),
                right: Point::new(15 + motion.walk_offset, leg_y).clamped(),
            }
        } else {
            LegAnchor {
                left: Point::new(12, leg_y).clamped(),
                right: Point::new(17, leg_y).clamped(),
            }
        };
        let hands = if side {
            HandAnchor {
                left: None,
                right: None,
                leading: Some(Point::new(13 + motion.walk_offset, hand_y).clamped()),
                y: hand_y,
            }
        } else {
            HandAnchor {
                left: Some(Point::new(8, hand_y).clamped()),
                right: Some(Point::new(22, hand_y).clamped()),
                leading: None,
                y: hand_y,
            }
        };

        Anchors {
            head: BlockAnchor {
                top_left: head_top_left.clamped(),
                center: Point::new(head_top_left.x + if side { 4 } else { 6 }, head_y + 5)
                    .clamped(),
            },
            eyes,
            torso: BlockAnchor {
                top_left: Point::new(torso_x, chest_y).clamped(),
                center: Point::new(16, chest_y + 2).clamped(),
            },
            pelvis: BlockAnchor {
                top_left: Point::new(torso_x, waist_y).clamped(),
                center: Point::new(16, waist_y + 2).clamped(),
            },
            legs,
            hands,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchors.rs"]
mod tests;
