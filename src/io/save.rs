use std::path::Path;

use tracing::debug;

use crate::character::model::CharacterDescription;
use crate::foundation::core::FidelityTier;
use crate::foundation::error::{SpriteError, SpriteResult};

/// The persisted blob: the character plus the UI's selected fidelity tier.
///
/// Deserialization is forward and backward compatible: unknown fields are
/// ignored and missing fields fall back to their defaults, so blobs written
/// by older builds keep loading.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// The character description, stored verbatim.
    pub character: CharacterDescription,
    /// Selected fidelity tier.
    pub tier: FidelityTier,
}

impl SaveData {
    /// Bundle a character with a tier.
    pub fn new(character: CharacterDescription, tier: FidelityTier) -> Self {
        Self { character, tier }
    }
}

/// Serialize a save blob to JSON.
pub fn encode(save: &SaveData) -> SpriteResult<String> {
    serde_json::to_string_pretty(save)
        .map_err(|e| SpriteError::persistence(format!("encode save data: {e}")))
}

/// Restore a save blob from JSON, defaulting missing fields.
pub fn decode(json: &str) -> SpriteResult<SaveData> {
    serde_json::from_str(json)
        .map_err(|e| SpriteError::persistence(format!("decode save data: {e}")))
}

/// Write a save blob to a file.
pub fn save_file(save: &SaveData, path: &Path) -> SpriteResult<()> {
    let json = encode(save)?;
    std::fs::write(path, json).map_err(|e| {
        SpriteError::persistence(format!("write save '{}': {e}", path.display()))
    })?;
    debug!(path = %path.display(), "saved character");
    Ok(())
}

/// Load a save blob from a file.
pub fn load_file(path: &Path) -> SpriteResult<SaveData> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        SpriteError::persistence(format!("read save '{}': {e}", path.display()))
    })?;
    decode(&json)
}

#[cfg(test)]
#[path = "../../tests/unit/io/save.rs"]
mod tests;
