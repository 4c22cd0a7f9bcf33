//! Bundled static assets, base64-encoded once per process.
//!
//! Fonts, the default logo, the placeholder avatar, and the background
//! pattern are compiled into the binary and encoded lazily behind
//! `OnceLock` statics. Requests only ever read the cached strings, so no
//! per-request I/O or encoding happens and the values are safe to share
//! across threads.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as Base64Engine;

static LOGO: OnceLock<String> = OnceLock::new();
static DEFAULT_AVATAR: OnceLock<String> = OnceLock::new();
static PATTERN: OnceLock<String> = OnceLock::new();
static FONT_REGULAR: OnceLock<String> = OnceLock::new();
static FONT_BOLD: OnceLock<String> = OnceLock::new();
static FONT_MONO: OnceLock<String> = OnceLock::new();

/// Default logo prepended to every image strip (base64 PNG).
pub fn logo() -> &'static str {
    LOGO.get_or_init(|| STANDARD.encode(include_bytes!("../assets/images/logo.png")))
}

/// Placeholder avatar used when the request supplies none (base64 PNG).
pub fn default_avatar() -> &'static str {
    DEFAULT_AVATAR
        .get_or_init(|| STANDARD.encode(include_bytes!("../assets/images/default_avatar.png")))
}

/// Tiling background pattern (base64 PNG).
pub fn pattern() -> &'static str {
    PATTERN.get_or_init(|| STANDARD.encode(include_bytes!("../assets/images/pattern.png")))
}

/// Inter regular weight (base64 woff2).
pub fn font_regular() -> &'static str {
    FONT_REGULAR
        .get_or_init(|| STANDARD.encode(include_bytes!("../assets/fonts/Inter-Regular.woff2")))
}

/// Inter bold weight (base64 woff2).
pub fn font_bold() -> &'static str {
    FONT_BOLD.get_or_init(|| STANDARD.encode(include_bytes!("../assets/fonts/Inter-Bold.woff2")))
}

/// Vera Mono, used for code spans (base64 woff2).
pub fn font_mono() -> &'static str {
    FONT_MONO.get_or_init(|| STANDARD.encode(include_bytes!("../assets/fonts/Vera-Mono.woff2")))
}
