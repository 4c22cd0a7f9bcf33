//! Error types for card request parsing

use thiserror::Error;

/// Result type alias for card operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a card request.
///
/// Both variants are terminal for the request: the caller should map them
/// to a client-error HTTP status rather than render degraded content.
/// Rendering itself ([`crate::render_html`]) is total and never fails for
/// a request that parsed successfully.
#[derive(Error, Debug)]
pub enum Error {
    /// A scalar-only query parameter (`fontSize`, `theme`, `username`,
    /// `avatar`) was supplied more than once.
    #[error("Expected a single {0}")]
    MultipleValues(&'static str),

    /// Percent-decoding of `text` or `avatar` failed.
    #[error("Failed to decode {field}: {reason}")]
    Decoding {
        field: &'static str,
        reason: String,
    },
}
