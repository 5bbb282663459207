//! View-node model handed to the rendering layer.

use mimeview_mime::charset;

/// Which kind of view node an entity becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewNodeKind {
    /// `multipart/mixed`: parts shown in sequence, attachments collapsible.
    MultipartMixed,
    /// `multipart/alternative`: one of several renderings at a time.
    MultipartAlternative,
    /// `text/plain`.
    TextPlain,
    /// `text/html`.
    TextHtml,
    /// Anything else: shown as a raw dump.
    Unknown,
}

impl ViewNodeKind {
    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MultipartMixed => "multipart-mixed",
            Self::MultipartAlternative => "multipart-alternative",
            Self::TextPlain => "text-plain",
            Self::TextHtml => "text-html",
            Self::Unknown => "unknown",
        }
    }
}

/// Metadata for a part offered as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachmentMeta {
    /// Suggested filename, already decoded; never empty.
    pub filename: String,
}

/// One entry of a [`ViewNode::MultipartMixed`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedPart {
    /// The rendered child.
    pub node: ViewNode,
    /// Whether the child is wrapped as a collapsible attachment.
    pub is_attachment: bool,
    /// Present exactly when `is_attachment` is set.
    pub attachment: Option<AttachmentMeta>,
}

impl MixedPart {
    /// Wraps an inline child.
    #[must_use]
    pub const fn inline(node: ViewNode) -> Self {
        Self {
            node,
            is_attachment: false,
            attachment: None,
        }
    }

    /// Wraps a child as an attachment.
    #[must_use]
    pub fn attachment(node: ViewNode, filename: impl Into<String>) -> Self {
        Self {
            node,
            is_attachment: true,
            attachment: Some(AttachmentMeta {
                filename: filename.into(),
            }),
        }
    }

    /// Returns the attachment filename, if this is an attachment.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.attachment.as_ref().map(|meta| meta.filename.as_str())
    }
}

/// One entry of a [`ViewNode::MultipartAlternative`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativePart {
    /// The child's content type (e.g. `text/html`), used as a tab label.
    pub label: String,
    /// The rendered child.
    pub node: ViewNode,
}

/// Renderable tree mirroring the structure of a message.
///
/// Holds no reference to the entity it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewNode {
    /// Fallback: headers and undecoded body as text.
    Unknown {
        /// Debug rendering of the whole entity.
        raw_dump: String,
    },
    /// Parts shown in order; some wrapped as attachments.
    MultipartMixed {
        /// Children in source order.
        children: Vec<MixedPart>,
    },
    /// Alternative renderings of the same content.
    MultipartAlternative {
        /// Children in source order, duplicates kept.
        children: Vec<AlternativePart>,
    },
    /// Decoded plain text.
    TextPlain {
        /// Transfer-decoded, charset-transcoded text.
        text: String,
    },
    /// HTML document left for the renderer to interpret.
    TextHtml {
        /// Transfer-decoded bytes, still in `charset`.
        html: Vec<u8>,
        /// Declared charset, or the HTML default.
        charset: String,
    },
}

impl ViewNode {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ViewNodeKind {
        match self {
            Self::Unknown { .. } => ViewNodeKind::Unknown,
            Self::MultipartMixed { .. } => ViewNodeKind::MultipartMixed,
            Self::MultipartAlternative { .. } => ViewNodeKind::MultipartAlternative,
            Self::TextPlain { .. } => ViewNodeKind::TextPlain,
            Self::TextHtml { .. } => ViewNodeKind::TextHtml,
        }
    }

    /// Counts attachment entries in this subtree, nested ones included.
    #[must_use]
    pub fn attachment_count(&self) -> usize {
        match self {
            Self::MultipartMixed { children } => children
                .iter()
                .map(|part| usize::from(part.is_attachment) + part.node.attachment_count())
                .sum(),
            Self::MultipartAlternative { children } => children
                .iter()
                .map(|part| part.node.attachment_count())
                .sum(),
            Self::Unknown { .. } | Self::TextPlain { .. } | Self::TextHtml { .. } => 0,
        }
    }

    /// Decodes a [`ViewNode::TextHtml`] body with its charset.
    ///
    /// Unsupported charsets fall back to lossy UTF-8. Returns `None` for
    /// every other variant.
    #[must_use]
    pub fn html_text(&self) -> Option<String> {
        let Self::TextHtml { html, charset } = self else {
            return None;
        };
        Some(
            charset::transcode(html, charset)
                .unwrap_or_else(|_| String::from_utf8_lossy(html).into_owned()),
        )
    }
}
