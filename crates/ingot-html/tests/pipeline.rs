use ingot_html::{
    add_class, build, encode, expand, normalize_regexp_pattern, Attributes, Content,
};
use pretty_assertions::assert_eq;

#[test]
fn tag_attributes_and_encoder_compose() {
    let mut attrs = Attributes::new();
    attrs.set("href", "/docs?a=1&b=2");
    add_class(&mut attrs, "link");
    add_class(&mut attrs, "external");

    let content = encode([Content::text("Docs & more")]);
    assert_eq!(
        build("a", &content, &attrs),
        r#"<a class="link external" href="/docs?a=1&amp;b=2">Docs &amp; more</a>"#
    );
}

#[test]
fn template_assembles_prerendered_fragments() {
    let input = build("input", "", &[("type", "text")].into_iter().collect());
    let out = expand(
        "{prefix}{tag}{suffix}",
        &[("prefix", "p\n"), ("tag", &input), ("suffix", "\ns")],
    );
    assert_eq!(out, "p\n<input type=\"text\">\ns");
}

#[test]
fn attribute_round_trip_drops_absent_values() {
    let mut attrs = Attributes::new();
    attrs.set("required", true);
    attrs.set("disabled", false);
    attrs.set("placeholder", "Name");

    let rendered = attrs.render();
    assert!(rendered.contains("required"));
    assert!(!rendered.contains("disabled"));
    assert!(rendered.contains(r#"placeholder="Name""#));
}

#[test]
fn pcre_pattern_normalization() {
    assert_eq!(
        normalize_regexp_pattern("/[a-z\\x{00FF}]+/i", None).unwrap(),
        "[a-z\\u00FF]+"
    );
    assert_eq!(
        normalize_regexp_pattern("~\\d{4}~", None).unwrap(),
        "\\d{4}"
    );
    assert!(normalize_regexp_pattern("x", None).is_err());
}
