//! Export tests — write beste.svg / beste.png into a scratch directory.

use grandstaff::export::{PNG_FILE_NAME, SVG_FILE_NAME};
use grandstaff::{export_png, export_svg, render_text, LayoutConfig, RenderResult};

fn sample_render() -> RenderResult {
    render_text("G4-h, E♭4-q, D4-q\nC3-w", &LayoutConfig::default()).expect("sample renders")
}

#[test]
fn export_without_render_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(export_svg(None, dir.path()).unwrap(), None);
    assert_eq!(export_png(None, dir.path()).unwrap(), None);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn export_svg_writes_standalone_document() {
    let dir = tempfile::tempdir().unwrap();
    let render = sample_render();

    let path = export_svg(Some(&render), dir.path()).unwrap().expect("file written");
    assert_eq!(path, dir.path().join(SVG_FILE_NAME));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render.svg);
    let doc = roxmltree::Document::parse(&written).unwrap();
    assert_eq!(doc.root_element().tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
}

#[test]
fn export_png_writes_image_of_render_size() {
    let dir = tempfile::tempdir().unwrap();
    let render = sample_render();

    let path = export_png(Some(&render), dir.path()).unwrap().expect("file written");
    assert_eq!(path, dir.path().join(PNG_FILE_NAME));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    // IHDR width and height, big-endian
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (350, 210));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = export_svg(Some(&sample_render()), &missing).unwrap_err();
    assert!(matches!(err, grandstaff::Error::Io { .. }));
}
