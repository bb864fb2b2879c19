//! Coordinate-anchor derivation: turns direction, species, and walk phase
//! into the placement points every part renderer reads.

pub mod anchors;
