use super::*;

const FACE: Stencil = Stencil::new(4, 3, &["ssss", "s.es", "ss"]);

#[test]
fn cell_reads_mapped_characters() {
    assert_eq!(FACE.cell(0, 0), Some('s'));
    assert_eq!(FACE.cell(2, 1), Some('e'));
}

#[test]
fn dot_cells_are_transparent() {
    assert_eq!(FACE.cell(1, 1), None);
}

#[test]
fn short_rows_pad_with_transparent() {
    assert_eq!(FACE.cell(1, 2), Some('s'));
    assert_eq!(FACE.cell(2, 2), None);
    assert_eq!(FACE.cell(3, 2), None);
}

#[test]
fn out_of_bounds_cells_are_transparent() {
    assert_eq!(FACE.cell(-1, 0), None);
    assert_eq!(FACE.cell(0, -1), None);
    assert_eq!(FACE.cell(4, 0), None);
    assert_eq!(FACE.cell(0, 3), None);
}

#[test]
fn flipped_opts_only_set_flip() {
    assert!(StampOpts::FLIPPED.flip_x);
    assert!(!StampOpts::FLIPPED.erase);
    let d = StampOpts::default();
    assert!(!d.flip_x && !d.erase);
}
