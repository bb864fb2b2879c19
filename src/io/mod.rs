//! Boundary collaborators: persistence, PNG export, and localization.

pub mod export;
pub mod lang;
pub mod save;
