//! OGCard — social card generator core
//!
//! This crate turns an HTTP request path plus query parameters into a
//! self-contained HTML document suitable for rasterization into a social
//! preview image ("og:image" card). It deliberately covers only the pure
//! core of that pipeline:
//!
//! - **Request parsing**: untyped query parameters become a validated
//!   [`ParsedRequest`], or a typed error the HTTP layer can map to a status.
//! - **Document rendering**: a [`ParsedRequest`] becomes one HTML string
//!   with inline CSS, inline fonts, and an inline background pattern, so
//!   the document renders identically anywhere with no asset fetches.
//!
//! The HTTP server and the screenshot/rasterization step are external
//! collaborators and are out of scope here.
//!
//! # Example
//!
//! ```
//! use ogcard::{parse_request_uri, render_html, FileType};
//!
//! # fn main() -> Result<(), ogcard::Error> {
//! let req = parse_request_uri("/Hello%20World.png?theme=dark&username=Alice")?;
//! assert_eq!(req.file_type, FileType::Png);
//! assert_eq!(req.text, "Hello World");
//!
//! let html = render_html(&req);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

pub mod assets;
pub mod error;
pub mod parser;
pub mod template;

mod emoji;
mod sanitize;

pub use error::{Error, Result};
pub use parser::{parse_request, parse_request_uri, QueryMap};
pub use template::render_html;

/// Output image format, derived from the request path's trailing extension.
///
/// Only the literal extension `jpeg` selects [`FileType::Jpeg`]; any other
/// extension (including a missing one) falls back to PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Png,
    Jpeg,
}

impl FileType {
    /// File extension without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Png => "png",
            FileType::Jpeg => "jpeg",
        }
    }

    /// MIME type for the rasterized output, for the embedding HTTP layer.
    pub fn content_type(&self) -> &'static str {
        match self {
            FileType::Png => "image/png",
            FileType::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card color theme.
///
/// Anything other than the literal query value `dark` (case-sensitive)
/// selects the light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A validated, normalized card request.
///
/// Built once per incoming request by [`parse_request`] (or
/// [`parse_request_uri`]), never mutated afterward, and consumed by
/// [`render_html`]. String fields hold either base64 image payloads or
/// URLs; the renderer decides per value which form it is.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedRequest {
    /// Output format for the downstream rasterizer.
    pub file_type: FileType,
    /// Heading content (percent-decoded path, extension stripped).
    pub text: String,
    /// Attribution line shown in the bottom-left corner, if any.
    pub username: Option<String>,
    /// Avatar image: base64 payload or URL. Defaults to the bundled
    /// placeholder avatar when the query omits it.
    pub avatar: String,
    /// Color theme.
    pub theme: Theme,
    /// Whether `text` is interpreted as Markdown.
    pub md: bool,
    /// CSS font-size for the heading, e.g. `96px`.
    pub font_size: String,
    /// Image strip sources. Element 0 is always the bundled logo.
    pub images: Vec<String>,
    /// Per-image width overrides, positionally paired with `images`.
    pub widths: Vec<String>,
    /// Per-image height overrides, positionally paired with `images`.
    pub heights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_defaults_and_labels() {
        assert_eq!(FileType::default(), FileType::Png);
        assert_eq!(FileType::Jpeg.as_str(), "jpeg");
        assert_eq!(FileType::Png.content_type(), "image/png");
        assert_eq!(FileType::Jpeg.to_string(), "jpeg");
    }

    #[test]
    fn test_theme_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&FileType::Jpeg).unwrap(), "\"jpeg\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
