//! Request parsing: path and query parameters into a [`ParsedRequest`].
//!
//! The core entry point is [`parse_request`], which takes the path and a
//! uniform name -> values multimap so the "scalar parameter supplied
//! twice" case is an explicit validation error rather than a runtime type
//! surprise. [`parse_request_uri`] is a convenience wrapper for callers
//! holding a raw `path?query` string.

use std::collections::HashMap;

use log::info;
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::{assets, FileType, ParsedRequest, Theme};

/// Query parameters as an ordered-values multimap. Repeated keys append.
pub type QueryMap = HashMap<String, Vec<String>>;

/// Parse a raw request target (`/<text>[.<ext>][?query]`) into a
/// [`ParsedRequest`].
///
/// Logs one diagnostic line per request with the raw target, decodes the
/// query string (`application/x-www-form-urlencoded` semantics, so `+`
/// means space there), and delegates to [`parse_request`].
pub fn parse_request_uri(raw: &str) -> Result<ParsedRequest> {
    info!("HTTP {}", raw);
    let (path, query) = match raw.split_once('?') {
        Some((path, query)) => (path, query),
        None => (raw, ""),
    };
    let mut map = QueryMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        map.entry(key.into_owned()).or_default().push(value.into_owned());
    }
    parse_request(path, &map)
}

/// Parse a request path plus already-split query parameters.
///
/// Fails with [`Error::MultipleValues`] when a scalar-only parameter
/// (`fontSize`, `theme`, `username`, `avatar`) is repeated, and with
/// [`Error::Decoding`] when percent-decoding of the path text or the
/// avatar value fails.
pub fn parse_request(path: &str, query: &QueryMap) -> Result<ParsedRequest> {
    let font_size = scalar(query, "fontSize")?;
    let theme = scalar(query, "theme")?;
    let username = scalar(query, "username")?;
    let avatar = scalar(query, "avatar")?;

    let (raw_text, extension) = split_path(path);

    // An empty supplied value counts as absent, like a missing key.
    let avatar = match avatar {
        Some(value) if !value.is_empty() => percent_decode("avatar", value)?,
        _ => assets::default_avatar().to_string(),
    };

    // The bundled logo always leads the strip, whether or not the query
    // supplied any images.
    let mut images = vec![assets::logo().to_string()];
    images.extend(values(query, "images"));

    Ok(ParsedRequest {
        file_type: if extension == "jpeg" {
            FileType::Jpeg
        } else {
            FileType::Png
        },
        text: percent_decode("text", &raw_text)?,
        username: username.map(str::to_string),
        avatar,
        theme: if theme == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        },
        md: matches!(query.get("md").map(Vec::as_slice), Some([v]) if v == "1" || v == "true"),
        font_size: font_size
            .filter(|value| !value.is_empty())
            .unwrap_or("96px")
            .to_string(),
        images,
        widths: values(query, "widths"),
        heights: values(query, "heights"),
    })
}

/// Fetch a parameter that must appear at most once.
fn scalar<'a>(query: &'a QueryMap, name: &'static str) -> Result<Option<&'a str>> {
    match query.get(name).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.as_str())),
        Some(_) => Err(Error::MultipleValues(name)),
    }
}

/// Fetch a repeatable parameter, preserving supply order.
fn values(query: &QueryMap, name: &str) -> Vec<String> {
    query.get(name).cloned().unwrap_or_default()
}

/// Split `/<text>[.<ext>]` into text and extension.
///
/// Only the last dot separates the extension, so literal dots survive in
/// the text: `/a.b.c` -> (`a.b`, `c`). No dot means no extension.
fn split_path(path: &str) -> (String, String) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    match trimmed.rsplit_once('.') {
        Some((text, extension)) => (text.to_string(), extension.to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

/// Strict percent-decoding with `decodeURIComponent` failure semantics:
/// an incomplete or non-hex escape is an error, `+` is literal, and the
/// decoded bytes must be valid UTF-8.
fn percent_decode(field: &'static str, input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(Error::Decoding {
                    field,
                    reason: "incomplete percent-escape".to_string(),
                });
            }
            let hi = hex_value(bytes[i + 1]);
            let lo = hex_value(bytes[i + 2]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                _ => {
                    return Err(Error::Decoding {
                        field,
                        reason: format!("invalid percent-escape at byte {}", i),
                    })
                }
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| Error::Decoding {
        field,
        reason: "decoded bytes are not valid UTF-8".to_string(),
    })
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
