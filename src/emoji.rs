//! Emoji substitution: replace Unicode emoji with inline Twemoji images.
//!
//! Emoji render inconsistently (or not at all) inside a headless
//! rasterizer, so the heading swaps every emoji cluster for an `<img>`
//! pointing at the Twemoji SVG for that codepoint sequence. The `.emoji`
//! CSS class in the document sizes these to 1em.

use unicode_segmentation::UnicodeSegmentation;

const TWEMOJI_SVG_BASE: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/";

/// Replace every emoji grapheme cluster in `html` with an inline image
/// reference. Non-emoji clusters pass through unchanged, so this is safe
/// to run over already-rendered markup.
pub fn emojify(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for grapheme in html.graphemes(true) {
        if is_emoji(grapheme) {
            out.push_str(&image_tag(grapheme));
        } else {
            out.push_str(grapheme);
        }
    }
    out
}

fn is_emoji(grapheme: &str) -> bool {
    emojis::get(grapheme).is_some() || emojis::get(grapheme.trim_end_matches('\u{fe0f}')).is_some()
}

fn image_tag(emoji: &str) -> String {
    format!(
        "<img class=\"emoji\" draggable=\"false\" alt=\"{emoji}\" src=\"{TWEMOJI_SVG_BASE}{code}.svg\"/>",
        code = twemoji_code(emoji),
    )
}

/// Twemoji asset name for an emoji cluster: the codepoints in lowercase
/// hex joined by `-`, with `U+FE0F` variation selectors dropped unless
/// the cluster contains a `U+200D` joiner.
fn twemoji_code(emoji: &str) -> String {
    let has_joiner = emoji.contains('\u{200d}');
    let codes: Vec<String> = emoji
        .chars()
        .filter(|&c| has_joiner || c != '\u{fe0f}')
        .map(|c| format!("{:x}", c as u32))
        .collect();
    codes.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(emojify("Hello World"), "Hello World");
        assert_eq!(emojify("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn test_simple_emoji_becomes_image() {
        let out = emojify("fire \u{1f525}!");
        assert!(out.contains("class=\"emoji\""));
        assert!(out.contains("1f525.svg"));
        assert!(out.starts_with("fire "));
        assert!(out.ends_with('!'));
    }

    #[test]
    fn test_variation_selector_dropped_from_code() {
        // U+2764 U+FE0F (red heart) maps to the bare-codepoint asset.
        assert_eq!(twemoji_code("\u{2764}\u{fe0f}"), "2764");
    }

    #[test]
    fn test_zwj_sequence_keeps_selectors() {
        // Woman technologist: U+1F469 U+200D U+1F4BB stays fully qualified.
        assert_eq!(twemoji_code("\u{1f469}\u{200d}\u{1f4bb}"), "1f469-200d-1f4bb");
        let out = emojify("\u{1f469}\u{200d}\u{1f4bb}");
        assert!(out.contains("1f469-200d-1f4bb.svg"));
    }

    #[test]
    fn test_ascii_symbols_not_treated_as_emoji() {
        assert_eq!(emojify("1 + 1 = 2 #tag *star*"), "1 + 1 = 2 #tag *star*");
    }
}
