//! Rendering tests — render note text to SVG and inspect the document.

use grandstaff::{render_score, render_text, Error, LayoutConfig, Score};

const SAMPLE: &str = "G4-h, E♭4-q, D4-q
C3-w

C4-h, D4-q, E♭4-q
G2-h, B♭2-h";

fn render(text: &str) -> String {
    render_text(text, &LayoutConfig::default())
        .expect("render should succeed")
        .svg
}

fn attr(node: &roxmltree::Node, name: &str) -> f64 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| panic!("missing numeric attribute {name}"))
}

fn with_class<'a, 'i>(doc: &'a roxmltree::Document<'i>, class: &str) -> Vec<roxmltree::Node<'a, 'i>> {
    doc.descendants()
        .filter(|n| n.attribute("class") == Some(class))
        .collect()
}

#[test]
fn render_sample_svg() {
    let svg = render(SAMPLE);

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");

    let doc = roxmltree::Document::parse(&svg).expect("SVG should be well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(attr(&root, "width"), 600.0);
    assert_eq!(attr(&root, "height"), 210.0);

    assert_eq!(with_class(&doc, "staff-line").len(), 10);
    assert_eq!(with_class(&doc, "clef-text").len(), 2);
    // 3 + 1 + 3 + 2 noteheads
    assert_eq!(with_class(&doc, "note-head").len(), 9);
    // C3-w is the only stemless note
    assert_eq!(with_class(&doc, "note-stem").len(), 8);
    assert_eq!(with_class(&doc, "accidental-text").len(), 3);
}

#[test]
fn first_measure_notes_share_four_beats() {
    let svg = render("G4-h, E♭4-q, D4-q\n\nC4-w");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let xs: Vec<f64> = with_class(&doc, "note-head").iter().map(|n| attr(n, "cx")).collect();
    assert_eq!(xs, vec![80.0, 195.0, 252.5, 330.0]);
}

#[test]
fn rest_draws_glyph_not_notehead() {
    let svg = render("(sus)-q");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert!(with_class(&doc, "note-head").is_empty());

    let rests = with_class(&doc, "rest-text");
    assert_eq!(rests.len(), 1);
    assert_eq!(rests[0].text(), Some("\u{1D13D}"));
    assert_eq!(attr(&rests[0], "y"), 75.0);
}

#[test]
fn open_and_filled_noteheads() {
    let svg = render("C5-w, C5-h, C5-q, C5-e");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let fills: Vec<&str> = with_class(&doc, "note-head")
        .iter()
        .filter_map(|n| n.attribute("fill"))
        .collect();
    assert_eq!(fills, vec!["white", "white", "black", "black"]);
    assert_eq!(with_class(&doc, "note-flag").len(), 1);
}

#[test]
fn ledger_lines_for_notes_beyond_the_staff() {
    let svg = render("C4-w, A5-w, B4-w\nE2-w");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let ys: Vec<f64> = with_class(&doc, "ledger-line").iter().map(|n| attr(n, "y1")).collect();
    // middle C below the treble staff, A5 above it, E2 below the bass staff
    assert_eq!(ys, vec![100.0, 40.0, 170.0]);
}

#[test]
fn fourth_ledger_position_below_the_staff() {
    let svg = render("D3-w
F1-w");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let ys: Vec<f64> = with_class(&doc, "ledger-line").iter().map(|n| attr(n, "y1")).collect();
    assert_eq!(ys, vec![130.0, 200.0]);
}

#[test]
fn dotted_notes_get_a_dot() {
    let svg = render("G4-d-h, A4-d-q");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let dots: Vec<(f64, f64)> = with_class(&doc, "note-dot")
        .iter()
        .map(|n| (attr(n, "cx"), attr(n, "cy")))
        .collect();
    assert_eq!(dots, vec![(90.0, 75.0), (262.5, 75.0)]);
}

#[test]
fn overflowing_measure_still_renders() {
    let svg = render("C4-w, D4-w, E4-w");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let xs: Vec<f64> = with_class(&doc, "note-head").iter().map(|n| attr(n, "cx")).collect();
    assert_eq!(xs, vec![80.0, 310.0, 540.0]);
}

#[test]
fn empty_score_is_not_rendered() {
    let cfg = LayoutConfig::default();
    assert!(matches!(render_text("   \n\n", &cfg), Err(Error::EmptyScore)));
    assert!(matches!(render_score(&Score::new(), &cfg), Err(Error::EmptyScore)));
}

#[test]
fn custom_measure_width_changes_spacing() {
    let cfg = LayoutConfig::from_json(r#"{ "measure_width": 420, "measure_margin": 20 }"#).unwrap();
    let result = render_text("C5-q, D5-q\n\nE5-w", &cfg).unwrap();
    assert_eq!(result.width, 940.0);

    let doc = roxmltree::Document::parse(&result.svg).unwrap();
    let xs: Vec<f64> = with_class(&doc, "note-head").iter().map(|n| attr(n, "cx")).collect();
    assert_eq!(xs, vec![80.0, 180.0, 500.0]);
}
