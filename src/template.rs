//! Document rendering: a [`ParsedRequest`] becomes one self-contained
//! HTML string.
//!
//! The document inlines everything it needs (fonts, background pattern,
//! bundled images) as base64 data URIs, so the downstream rasterizer can
//! load it without any network access beyond user-supplied image URLs.
//! Rendering is pure: the same request always produces byte-identical
//! output, and no well-formed request can make it fail.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as Base64Engine;
use pulldown_cmark::{html, Options, Parser};

use crate::sanitize::escape_html;
use crate::{assets, emoji, ParsedRequest, Theme};

const PRIMARY: &str = "#006f95";
const SECONDARY: &str = "#98ff98";

/// Dark-theme page background.
pub const DARK_BACKGROUND: &str = "#303030";
/// Light-theme page background.
pub const LIGHT_BACKGROUND: &str = "white";

const DEFAULT_WIDTH: &str = "auto";
const DEFAULT_HEIGHT: &str = "120";

/// Render the complete HTML document for a parsed card request.
pub fn render_html(req: &ParsedRequest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <meta charset="utf-8">
    <title>Generated Image</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        {css}
    </style>
    <body>
            <div class="logo-wrapper">
                {strip}
            </div>
            <div class="heading">{heading}
            </div>
            {identity}
    </body>
</html>"#,
        css = css(req.theme, &req.font_size),
        strip = image_strip(req),
        heading = heading_html(req),
        identity = identity_block(req),
    )
}

fn css(theme: Theme, font_size: &str) -> String {
    let (background, foreground) = match theme {
        Theme::Light => (LIGHT_BACKGROUND, PRIMARY),
        Theme::Dark => (DARK_BACKGROUND, "white"),
    };
    let radial = SECONDARY;
    format!(
        r#"
    @font-face {{
        font-family: 'Inter';
        font-style:  normal;
        font-weight: normal;
        src: url(data:font/woff2;charset=utf-8;base64,{regular}) format('woff2');
    }}

    @font-face {{
        font-family: 'Inter';
        font-style:  normal;
        font-weight: bold;
        src: url(data:font/woff2;charset=utf-8;base64,{bold}) format('woff2');
    }}

    @font-face {{
        font-family: 'Vera';
        font-style: normal;
        font-weight: normal;
        src: url(data:font/woff2;charset=utf-8;base64,{mono})  format("woff2");
      }}

    body {{
        background: {background};
        background-image: radial-gradient(circle at 25px 25px, {radial} 2%, transparent 0%), radial-gradient(circle at 75px 75px, {radial} 2%, transparent 0%);
        background-image: url(data:image/png;base64,{pattern});
        height: 100vh;
        display: flex;
        text-align: center;
        align-items: center;
        justify-content: center;
    }}

    code {{
        color: #D400FF;
        font-family: 'Vera';
        white-space: pre-wrap;
        letter-spacing: -5px;
    }}

    code:before, code:after {{
        content: '`';
    }}

    .logo-wrapper {{
        position: absolute;
        right: 50px;
        bottom: 50px;
        display: flex;
        align-items: center;
        align-content: center;
        justify-content: center;
        justify-items: center;
    }}

    .logo {{
        margin: 0 75px;
    }}

    .plus {{
        color: #BBB;
        font-family: Times New Roman, Verdana;
        font-size: 100px;
    }}

    .emoji {{
        height: 1em;
        width: 1em;
        margin: 0 .05em 0 .1em;
        vertical-align: -0.1em;
    }}

    .username {{
        font-family: 'Inter', sans-serif;
        display: flex;
        align-items: center;
        justify-content: center;
        position: absolute;
        left: 50px;
        bottom: 50px;
        font-size: 60px;
        color: {foreground};
    }}

    .username > img {{
        border-radius: 50%;
        margin-right: 50px;
    }}

    .heading {{
        font-family: 'Inter', sans-serif;
        font-size: {font_size};
        font-style: normal;
        color: {foreground};
        line-height: 1.8;
        background-color: {background};
        border-top: 2px solid {PRIMARY};
        border-bottom: 2px solid {PRIMARY};
        width: 100%;
    }}"#,
        regular = assets::font_regular(),
        bold = assets::font_bold(),
        mono = assets::font_mono(),
        pattern = assets::pattern(),
        font_size = escape_html(font_size),
    )
}

/// Heading content: Markdown or escaped literal text, then emoji
/// substitution over the resulting markup.
///
/// The Markdown path lets raw inline HTML through unchanged (the
/// Markdown renderer escapes only what it does not recognize), so `md=1`
/// input is trusted markup. The plain path escapes everything.
fn heading_html(req: &ParsedRequest) -> String {
    let rendered = if req.md {
        markdown_to_html(&req.text)
    } else {
        escape_html(&req.text)
    };
    emoji::emojify(&rendered)
}

fn markdown_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, Parser::new_ext(text, Options::all()));
    out
}

/// The bottom-right strip of images, `+`-separated.
fn image_strip(req: &ParsedRequest) -> String {
    let mut out = String::new();
    for (i, source) in req.images.iter().enumerate() {
        if i > 0 {
            out.push_str("<div class=\"plus\">+</div>");
        }
        let width = req.widths.get(i).map(String::as_str).unwrap_or(DEFAULT_WIDTH);
        let height = req.heights.get(i).map(String::as_str).unwrap_or(DEFAULT_HEIGHT);
        out.push_str(&image_tag(source, width, height));
    }
    out
}

/// Bottom-left avatar + username, or an empty placeholder.
fn identity_block(req: &ParsedRequest) -> String {
    match req.username.as_deref() {
        Some(username) if !username.is_empty() => {
            let avatar = if req.avatar.is_empty() {
                "<div></div>".to_string()
            } else {
                image_tag(&req.avatar, DEFAULT_WIDTH, DEFAULT_HEIGHT)
            };
            format!(
                "<div class=\"username\">\n                {avatar}\n                {username}</div>",
                username = escape_html(username),
            )
        }
        _ => "<div></div>".to_string(),
    }
}

/// A single strip/avatar image. Base64 payloads become PNG data URIs;
/// anything else is treated as a URL and escaped for attribute context.
fn image_tag(source: &str, width: &str, height: &str) -> String {
    let src = if is_base64(source) {
        // Space after the comma matches the byte shape downstream
        // rasterizers have always been fed.
        format!("data:image/png;base64, {source}")
    } else {
        escape_html(source)
    };
    format!(
        "<img class=\"logo\" alt=\"Generated Image\" src=\"{src}\" width=\"{width}\" height=\"{height}\" />",
        width = escape_html(width),
        height = escape_html(height),
    )
}

/// Canonical standard base64: alphabet-only groups of four with proper
/// trailing padding. URLs fail this immediately (`:` and `?` are outside
/// the alphabet).
fn is_base64(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}
