use super::*;

use crate::foundation::core::Direction;
use crate::render::frame::SpriteFrame;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "retrochar_{name}_{}_{}.png",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn export_buffer_is_export_size_square() {
    let bytes = export_rgba(&CharacterDescription::default(), &RenderParams::default());
    assert_eq!(bytes.len(), (EXPORT_SIZE * EXPORT_SIZE * 4) as usize);
}

#[test]
fn export_is_deterministic() {
    let desc = CharacterDescription {
        wings: 5,
        weapon: 2,
        ..Default::default()
    };
    let params = RenderParams {
        direction: Direction::Left,
        ..Default::default()
    };
    assert_eq!(export_rgba(&desc, &params), export_rgba(&desc, &params));
}

#[test]
fn export_matches_the_display_render_blockwise() {
    let desc = CharacterDescription::default();
    let params = RenderParams::default();
    let frame = render(&desc, &params);
    let bytes = export_rgba(&desc, &params);
    let scale = EXPORT_SIZE / SpriteFrame::size();
    let side = EXPORT_SIZE as usize;

    // Each display pixel expands to an unsmoothed scale x scale block.
    for (py, px) in [(0u32, 0u32), (24, 24), (12, 40), (30, 16)] {
        let want = frame.pixel(px, py);
        for dy in 0..scale {
            for dx in 0..scale {
                let x = (px * scale + dx) as usize;
                let y = (py * scale + dy) as usize;
                let i = (y * side + x) * 4;
                assert_eq!(
                    [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]],
                    [want.r, want.g, want.b, want.a],
                    "display ({px}, {py}) offset ({dx}, {dy})"
                );
            }
        }
    }
}

#[test]
fn export_png_writes_a_readable_image() {
    let path = temp_path("export_png");
    export_png(
        &CharacterDescription::default(),
        &RenderParams::default(),
        &path,
    )
    .unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), EXPORT_SIZE);
    assert_eq!(img.height(), EXPORT_SIZE);
    std::fs::remove_file(&path).ok();
}

#[test]
fn unwritable_path_is_an_export_error() {
    let path = std::path::Path::new("/definitely/not/a/real/dir/out.png");
    let err = export_png(
        &CharacterDescription::default(),
        &RenderParams::default(),
        path,
    )
    .unwrap_err();
    assert!(matches!(err, SpriteError::Export(_)));
}
