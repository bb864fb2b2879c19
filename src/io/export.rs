use std::path::Path;

use tracing::debug;

use crate::character::model::CharacterDescription;
use crate::foundation::core::EXPORT_SIZE;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::compositor::render;
use crate::render::frame::RenderParams;

/// Render a character at the fixed export resolution.
///
/// Export always re-renders from the description rather than resampling a
/// live preview, so the output is full fidelity regardless of the display
/// scale. Returns straight-alpha RGBA8 bytes, `EXPORT_SIZE` square.
pub fn export_rgba(desc: &CharacterDescription, params: &RenderParams) -> Vec<u8> {
    let frame = render(desc, params);
    let scale = EXPORT_SIZE / crate::render::frame::SpriteFrame::size();
    frame.to_rgba8(scale)
}

/// Render a character and write it as a PNG at the export resolution.
///
/// Failures are non-fatal export errors; they never invalidate an
/// in-memory render that produced the same frame.
pub fn export_png(
    desc: &CharacterDescription,
    params: &RenderParams,
    path: &Path,
) -> SpriteResult<()> {
    let bytes = export_rgba(desc, params);
    image::save_buffer_with_format(
        path,
        &bytes,
        EXPORT_SIZE,
        EXPORT_SIZE,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpriteError::export(format!("write png '{}': {e}", path.display())))?;
    debug!(path = %path.display(), size = EXPORT_SIZE, "exported png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/export.rs"]
mod tests;
