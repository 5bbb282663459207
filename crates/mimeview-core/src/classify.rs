//! Content-type driven dispatch.

use mimeview_mime::{ContentType, Entity};

use crate::node::ViewNodeKind;

/// Picks the view-node kind for an entity from its Content-Type header.
///
/// Total: a missing or unparseable header, unknown multipart subtypes
/// (`related`, `signed`, ...) and non-text leaves all map to
/// [`ViewNodeKind::Unknown`].
#[must_use]
pub fn classify(entity: &Entity) -> ViewNodeKind {
    entity
        .content_type()
        .map_or(ViewNodeKind::Unknown, |ct| classify_content_type(&ct))
}

/// Classification on an already parsed content type.
#[must_use]
pub fn classify_content_type(content_type: &ContentType) -> ViewNodeKind {
    let sub_type = content_type.sub_type.to_ascii_lowercase();

    if content_type.is_multipart() {
        match sub_type.as_str() {
            "mixed" => ViewNodeKind::MultipartMixed,
            "alternative" => ViewNodeKind::MultipartAlternative,
            _ => ViewNodeKind::Unknown,
        }
    } else if content_type.is_text() {
        match sub_type.as_str() {
            "plain" => ViewNodeKind::TextPlain,
            "html" => ViewNodeKind::TextHtml,
            _ => ViewNodeKind::Unknown,
        }
    } else {
        ViewNodeKind::Unknown
    }
}
