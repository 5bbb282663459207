//! Tree builder settings.

/// Settings for a [`TreeBuilder`](crate::TreeBuilder).
///
/// Constructed explicitly and passed to the builder; there is no global
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Charset for `text/plain` parts that declare none.
    pub plain_text_charset: String,
    /// Charset for `text/html` parts that declare none.
    pub html_charset: String,
    /// Filename for attachments without a usable `filename` parameter.
    pub unnamed_attachment: String,
    /// Entities nested deeper than this are rendered as raw dumps.
    pub max_depth: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            plain_text_charset: "us-ascii".to_string(),
            html_charset: "UTF-8".to_string(),
            unnamed_attachment: "unknown".to_string(),
            max_depth: 64,
        }
    }
}

impl BuildConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
