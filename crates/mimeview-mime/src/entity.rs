//! MIME entity tree.

use crate::content_type::{ContentDisposition, ContentType};
use crate::header::Headers;
use std::fmt;

/// Boundary used when re-serializing a multipart that never declared one.
const FALLBACK_BOUNDARY: &str = "mimeview-boundary";

/// Transfer encoding types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferEncoding {
    /// 7-bit ASCII.
    SevenBit,
    /// 8-bit binary.
    EightBit,
    /// Base64 encoding.
    Base64,
    /// Quoted-Printable encoding.
    QuotedPrintable,
    /// Binary (no encoding).
    Binary,
}

impl TransferEncoding {
    /// Parses transfer encoding from string.
    ///
    /// Unrecognized mechanisms are treated as 7bit, which decodes as identity.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "8bit" => Self::EightBit,
            "base64" => Self::Base64,
            "quoted-printable" => Self::QuotedPrintable,
            "binary" => Self::Binary,
            _ => Self::SevenBit, // Default (includes "7bit")
        }
    }
}

impl fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SevenBit => write!(f, "7bit"),
            Self::EightBit => write!(f, "8bit"),
            Self::Base64 => write!(f, "base64"),
            Self::QuotedPrintable => write!(f, "quoted-printable"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// What an entity carries after its headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    /// Raw, still transfer-encoded body bytes.
    Body(Vec<u8>),
    /// Ordered sub-entities of a multipart.
    Multipart(Vec<Entity>),
}

/// One node of a parsed message: headers plus either a body or children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    headers: Headers,
    content: Content,
}

impl Entity {
    /// Creates a leaf entity with a raw body.
    #[must_use]
    pub const fn leaf(headers: Headers, body: Vec<u8>) -> Self {
        Self {
            headers,
            content: Content::Body(body),
        }
    }

    /// Creates a multipart entity from its children.
    #[must_use]
    pub const fn multipart(headers: Headers, children: Vec<Self>) -> Self {
        Self {
            headers,
            content: Content::Multipart(children),
        }
    }

    /// Appends a header, builder style.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Returns the headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the content.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Gets the content type.
    ///
    /// Returns `None` when the header is absent or unparseable; no default
    /// type is assumed.
    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        self.headers
            .get("content-type")
            .and_then(|value| ContentType::parse(value).ok())
    }

    /// Gets the content disposition, if present and parseable.
    #[must_use]
    pub fn content_disposition(&self) -> Option<ContentDisposition> {
        self.headers
            .get("content-disposition")
            .and_then(|value| ContentDisposition::parse(value).ok())
    }

    /// Gets the declared transfer encoding, if any.
    #[must_use]
    pub fn transfer_encoding(&self) -> Option<TransferEncoding> {
        self.headers
            .get("content-transfer-encoding")
            .map(TransferEncoding::parse)
    }

    /// Returns the raw body of a leaf entity.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        match &self.content {
            Content::Body(body) => Some(body),
            Content::Multipart(_) => None,
        }
    }

    /// Returns the children of a multipart entity (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Body(_) => &[],
            Content::Multipart(children) => children,
        }
    }

    /// Checks if this entity holds children rather than a body.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self.content, Content::Multipart(_))
    }
}

impl fmt::Display for Entity {
    /// Writes the header lines as received, a blank line, then the
    /// undecoded body.
    ///
    /// Headers added in code are written as `Name: value`. Multiparts
    /// re-emit their delimiter lines around each child, with LF endings.
    /// Body bytes that are not UTF-8 are shown with replacement characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headers)?;
        writeln!(f)?;

        match &self.content {
            Content::Body(body) => write!(f, "{}", String::from_utf8_lossy(body)),
            Content::Multipart(children) => {
                let content_type = self.content_type();
                let boundary = content_type
                    .as_ref()
                    .and_then(ContentType::boundary)
                    .unwrap_or(FALLBACK_BOUNDARY);
                for child in children {
                    writeln!(f, "--{boundary}")?;
                    writeln!(f, "{child}")?;
                }
                writeln!(f, "--{boundary}--")
            }
        }
    }
}
