//! Integration tests for document rendering

use ogcard::{parse_request_uri, render_html, template};
use sha2::{Digest, Sha256};

fn render(target: &str) -> String {
    let req = parse_request_uri(target).expect("parse failed");
    render_html(&req)
}

#[test]
fn test_document_is_self_contained() {
    let html = render("/Hello");
    assert!(html.starts_with("<!DOCTYPE html>"));
    // Three fonts plus the background pattern, all inlined.
    assert_eq!(html.matches("data:font/woff2;charset=utf-8;base64,").count(), 3);
    assert!(html.contains("background-image: url(data:image/png;base64,"));
}

#[test]
fn test_script_injection_is_neutralized_in_plain_heading() {
    let html = render("/%3Cscript%3Ealert(1)%3C%2Fscript%3E");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn test_markdown_heading() {
    let html = render("/%23%20Title%20with%20%2A%2Abold%2A%2A?md=1");
    assert!(html.contains("<h1>"));
    assert!(html.contains("<strong>bold</strong>"));

    // Same text without md renders literally.
    let plain = render("/%23%20Title%20with%20%2A%2Abold%2A%2A");
    assert!(!plain.contains("<h1>"));
    assert!(plain.contains("# Title with **bold**"));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = render("/Hello%20World.png?theme=dark&username=Alice&images=aGVsbG8%3D");
    let second = render("/Hello%20World.png?theme=dark&username=Alice&images=aGVsbG8%3D");
    assert_eq!(
        hex::encode(Sha256::digest(first.as_bytes())),
        hex::encode(Sha256::digest(second.as_bytes()))
    );
    assert_eq!(first, second);
}

#[test]
fn test_dark_theme_background_and_username() {
    let html = render("/x?username=Alice&theme=dark");
    assert!(html.contains(&format!("background: {};", template::DARK_BACKGROUND)));
    let username_region = html
        .split("class=\"username\"")
        .nth(1)
        .expect("username block missing");
    assert!(username_region.contains("Alice"));
}

#[test]
fn test_light_theme_without_username_renders_empty_block() {
    let html = render("/Hello%20World.jpeg");
    assert!(html.contains(&format!("background: {};", template::LIGHT_BACKGROUND)));
    assert!(!html.contains("class=\"username\""));
    assert!(html.contains("Hello World"));
}

#[test]
fn test_image_strip_with_overrides_and_defaults() {
    // One user image with an explicit width; the logo at index 0 takes the
    // width too, so the user image falls back to defaults.
    let html = render("/x?images=https%3A%2F%2Fe.com%2Fa.png&widths=300&widths=150&heights=80");
    assert!(html.contains("width=\"300\""));
    assert!(html.contains("width=\"150\""));
    assert!(html.contains("height=\"80\""));
    assert!(html.contains("height=\"120\""));
    assert!(html.contains("src=\"https://e.com/a.png\""));
    assert_eq!(html.matches("<div class=\"plus\">+</div>").count(), 1);
}

#[test]
fn test_base64_image_becomes_data_uri() {
    let html = render("/x?images=aGVsbG8%3D");
    assert!(html.contains("src=\"data:image/png;base64, aGVsbG8=\""));
}

#[test]
fn test_emoji_substituted_in_heading() {
    let html = render("/%F0%9F%94%A5%20hot");
    assert!(html.contains("class=\"emoji\""));
    assert!(html.contains("1f525.svg"));
}

#[test]
fn test_custom_font_size_applied() {
    let html = render("/x?fontSize=200px");
    assert!(html.contains("font-size: 200px;"));
}
