use std::fs;

use ingot_html::HtmlError;
use ingot_widgets::Svg;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write_svg(dir: &tempfile::TempDir, name: &str, source: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn loads_file_and_drops_prologue_and_comments() {
    let dir = tempdir().unwrap();
    let path = write_svg(
        &dir,
        "icon.svg",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!-- generated by an editor -->\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n\
           <!-- inner comment -->\n\
           <path d=\"M0 0h24v24H0z\"/>\n\
         </svg>\n",
    );

    let html = Svg::new().file_path(path).render().unwrap();
    assert_eq!(
        html,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\"><path d=\"M0 0h24v24H0z\"/></svg>"
    );
}

#[test]
fn explicit_size_replaces_view_box() {
    let dir = tempdir().unwrap();
    let path = write_svg(
        &dir,
        "icon.svg",
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\"><g></g></svg>",
    );

    let html = Svg::new()
        .file_path(path)
        .height(24)
        .width(24)
        .render()
        .unwrap();
    assert_eq!(
        html,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"24\" width=\"24\"><g></g></svg>"
    );
}

#[test]
fn view_box_kept_without_both_dimensions() {
    let dir = tempdir().unwrap();
    let path = write_svg(
        &dir,
        "icon.svg",
        "<svg viewBox=\"0 0 24 24\"><g></g></svg>",
    );

    let html = Svg::new().file_path(path).height(24).render().unwrap();
    assert_eq!(
        html,
        "<svg viewBox=\"0 0 24 24\" height=\"24\"><g></g></svg>"
    );
}

#[test]
fn configured_attribute_overrides_file_attribute_in_place() {
    let dir = tempdir().unwrap();
    let path = write_svg(
        &dir,
        "icon.svg",
        "<svg fill=\"none\" stroke=\"black\"><g></g></svg>",
    );

    let html = Svg::new()
        .file_path(path)
        .fill("currentColor")
        .render()
        .unwrap();
    assert_eq!(
        html,
        "<svg fill=\"currentColor\" stroke=\"black\"><g></g></svg>"
    );
}

#[test]
fn self_closing_root() {
    let dir = tempdir().unwrap();
    let path = write_svg(&dir, "empty.svg", "<svg width=\"8\"/>");

    let html = Svg::new().file_path(path).render().unwrap();
    assert_eq!(html, "<svg width=\"8\"/>");
}

#[test]
fn file_without_svg_element_fails() {
    let dir = tempdir().unwrap();
    let path = write_svg(&dir, "not-svg.svg", "<html></html>");

    let err = Svg::new().file_path(&path).render().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("failed to load SVG file {path}: no <svg> element found")
    );
}

#[test]
fn missing_file_fails() {
    let err = Svg::new()
        .file_path("missing/icon.svg")
        .render()
        .unwrap_err();
    assert!(matches!(err, HtmlError::SvgLoad { .. }));
}

#[test]
fn inline_content_wraps_in_svg_tag() {
    let html = Svg::new()
        .view_box("0 0 16 16")
        .content("<circle cx=\"8\" cy=\"8\" r=\"7\"></circle>")
        .render()
        .unwrap();
    assert_eq!(
        html,
        "<svg viewBox=\"0 0 16 16\">\n<circle cx=\"8\" cy=\"8\" r=\"7\"></circle>\n</svg>"
    );
}

#[test]
fn file_and_content_are_mutually_exclusive() {
    let err = Svg::new()
        .content("<g></g>")
        .file_path("icon.svg")
        .render()
        .unwrap_err();
    assert!(matches!(err, HtmlError::Configuration(_)));

    let err = Svg::new().render().unwrap_err();
    assert!(matches!(err, HtmlError::Configuration(_)));
}
