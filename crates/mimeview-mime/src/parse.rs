//! Lenient wire-format parser producing an [`Entity`] tree.
//!
//! Never fails: anything it cannot split is kept as a leaf body, so the
//! viewer can still show it.

use crate::content_type::ContentType;
use crate::entity::Entity;
use crate::header::Headers;

/// Multiparts nested deeper than this keep their body undivided.
pub const MAX_NESTING: usize = 32;

impl Entity {
    /// Parses a complete message (headers, blank line, body).
    ///
    /// A `multipart/*` entity with a non-empty boundary parameter is split
    /// into children; preamble and epilogue text are dropped. A multipart
    /// without a boundary stays a leaf.
    #[must_use]
    pub fn parse(raw: &[u8]) -> Self {
        parse_entity(raw, 0)
    }
}

fn parse_entity(raw: &[u8], depth: usize) -> Entity {
    let (head, body) = split_head_body(raw);
    let headers = Headers::parse(&String::from_utf8_lossy(head));

    let boundary = headers
        .get("content-type")
        .and_then(|value| ContentType::parse(value).ok())
        .filter(ContentType::is_multipart)
        .and_then(|ct| ct.boundary().map(str::to_string))
        .filter(|b| !b.is_empty());

    match boundary {
        Some(boundary) if depth < MAX_NESTING => {
            let children = split_parts(body, &boundary)
                .into_iter()
                .map(|part| parse_entity(part, depth + 1))
                .collect();
            Entity::multipart(headers, children)
        }
        _ => Entity::leaf(headers, body.to_vec()),
    }
}

/// Splits at the first empty line. Input starting with an empty line has no
/// headers; input without one is all headers.
fn split_head_body(raw: &[u8]) -> (&[u8], &[u8]) {
    let mut pos = 0;
    while pos < raw.len() {
        let end = line_end(raw, pos);
        if trim_newline(&raw[pos..end]).is_empty() {
            return (&raw[..pos], &raw[end..]);
        }
        pos = end;
    }
    (raw, &[])
}

/// Returns the bodies between `--boundary` delimiter lines.
///
/// The line break before each delimiter belongs to the delimiter. A missing
/// close delimiter ends the last part at the end of input.
fn split_parts<'a>(body: &'a [u8], boundary: &str) -> Vec<&'a [u8]> {
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();

    let mut parts = Vec::new();
    let mut current: Option<usize> = None;
    let mut pos = 0;

    while pos < body.len() {
        let end = line_end(body, pos);
        let line = trim_trailing_space(trim_newline(&body[pos..end]));

        if let Some(rest) = line.strip_prefix(delimiter) {
            let closing = rest == b"--";
            if rest.is_empty() || closing {
                if let Some(start) = current.take() {
                    parts.push(trim_newline(&body[start..pos]));
                }
                if closing {
                    return parts;
                }
                current = Some(end);
            }
        }
        pos = end;
    }

    if let Some(start) = current {
        parts.push(&body[start..]);
    }
    parts
}

/// Index just past the next `\n` at or after `pos`, or the input length.
fn line_end(data: &[u8], pos: usize) -> usize {
    data[pos..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(data.len(), |idx| pos + idx + 1)
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn trim_trailing_space(line: &[u8]) -> &[u8] {
    let len = line
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t'))
        .map_or(0, |idx| idx + 1);
    &line[..len]
}
