//! Error types for MIME operations.

/// Result type alias for MIME operations.
pub type Result<T> = std::result::Result<T, Error>;

/// MIME error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid content type or content disposition header.
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    /// Malformed quoted-printable or encoded-word data.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The declared character set has no known decoder.
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),
}

impl Error {
    /// Returns `true` when a recognized transfer encoding met a structurally
    /// invalid byte stream.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_) | Self::Base64Decode(_))
    }
}
