//! Recursive entity tree to view tree transform.

use mimeview_mime::{ContentDisposition, Entity, Headers};
use tracing::{debug, warn};

use crate::classify::classify;
use crate::config::BuildConfig;
use crate::decode::{decode_transfer, lossy_text, transcode_charset};
use crate::node::{AlternativePart, MixedPart, ViewNode, ViewNodeKind};

/// Label for alternatives whose content type is missing or unparseable.
const UNLABELED_ALTERNATIVE: &str = "unknown";

/// Builds [`ViewNode`] trees according to a [`BuildConfig`].
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuildConfig,
}

/// Builds a view tree with the default configuration.
///
/// Never fails: decoding problems degrade the affected subtree only.
#[must_use]
pub fn build(entity: &Entity) -> ViewNode {
    TreeBuilder::default().build(entity)
}

impl TreeBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub const fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Builds the view tree for `entity` and everything below it.
    #[must_use]
    pub fn build(&self, entity: &Entity) -> ViewNode {
        self.build_at(entity, 0)
    }

    fn build_at(&self, entity: &Entity, depth: usize) -> ViewNode {
        if depth > self.config.max_depth {
            warn!(
                depth,
                max_depth = self.config.max_depth,
                "Nesting limit reached, dumping subtree"
            );
            return raw_dump(entity);
        }

        let kind = classify(entity);
        debug!(kind = kind.as_str(), depth, "Building view node");

        match kind {
            ViewNodeKind::Unknown => raw_dump(entity),
            // Declared multipart but never split (no boundary, or past the
            // parser's nesting limit): the body is the only content
            ViewNodeKind::MultipartMixed | ViewNodeKind::MultipartAlternative
                if !entity.is_multipart() =>
            {
                warn!(kind = kind.as_str(), "Multipart without parts, dumping body");
                raw_dump(entity)
            }
            ViewNodeKind::TextPlain | ViewNodeKind::TextHtml if entity.is_multipart() => {
                warn!(kind = kind.as_str(), "Text entity with parts, dumping subtree");
                raw_dump(entity)
            }
            ViewNodeKind::MultipartMixed => ViewNode::MultipartMixed {
                children: entity
                    .children()
                    .iter()
                    .map(|child| self.mixed_part(child, depth + 1))
                    .collect(),
            },
            ViewNodeKind::MultipartAlternative => ViewNode::MultipartAlternative {
                children: entity
                    .children()
                    .iter()
                    .map(|child| AlternativePart {
                        label: alternative_label(child),
                        node: self.build_at(child, depth + 1),
                    })
                    .collect(),
            },
            ViewNodeKind::TextPlain => ViewNode::TextPlain {
                text: self.plain_text(entity),
            },
            ViewNodeKind::TextHtml => ViewNode::TextHtml {
                html: decoded_body(entity),
                charset: declared_charset(entity)
                    .unwrap_or_else(|| self.config.html_charset.clone()),
            },
        }
    }

    /// Builds one child of a `multipart/mixed`, wrapping attachments.
    fn mixed_part(&self, child: &Entity, depth: usize) -> MixedPart {
        let node = self.build_at(child, depth);
        match child.content_disposition() {
            Some(disposition) if disposition.is_attachment() => {
                let filename = self.attachment_filename(&disposition);
                debug!(filename = %filename, "Wrapping attachment");
                MixedPart::attachment(node, filename)
            }
            _ => MixedPart::inline(node),
        }
    }

    fn attachment_filename(&self, disposition: &ContentDisposition) -> String {
        disposition
            .filename()
            .filter(|name| !name.is_empty())
            .map(Headers::decode_value)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.config.unnamed_attachment.clone())
    }

    fn plain_text(&self, entity: &Entity) -> String {
        let bytes = decoded_body(entity);
        let charset =
            declared_charset(entity).unwrap_or_else(|| self.config.plain_text_charset.clone());

        transcode_charset(&bytes, &charset).unwrap_or_else(|error| {
            warn!(charset = %charset, %error, "Charset not supported, reading as UTF-8");
            lossy_text(&bytes)
        })
    }
}

/// Transfer-decodes a leaf body; on failure the raw bytes are kept.
fn decoded_body(entity: &Entity) -> Vec<u8> {
    let raw = entity.body().unwrap_or_default();
    let encoding = entity.transfer_encoding();

    decode_transfer(raw, encoding).unwrap_or_else(|error| {
        warn!(mechanism = ?encoding, %error, "Transfer decoding failed, keeping raw body");
        raw.to_vec()
    })
}

/// The non-empty `charset` parameter of the content type, if any.
fn declared_charset(entity: &Entity) -> Option<String> {
    entity
        .content_type()
        .and_then(|ct| ct.charset().map(str::to_string))
        .filter(|charset| !charset.trim().is_empty())
}

fn alternative_label(entity: &Entity) -> String {
    entity
        .content_type()
        .map_or_else(|| UNLABELED_ALTERNATIVE.to_string(), |ct| ct.mime_type())
}

fn raw_dump(entity: &Entity) -> ViewNode {
    ViewNode::Unknown {
        raw_dump: entity.to_string(),
    }
}
