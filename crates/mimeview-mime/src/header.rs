//! MIME header handling.

use crate::encoding::decode_rfc2047;
use std::fmt;

/// A single header field, with its name spelled as received.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Field name (e.g., "Content-Type").
    pub name: String,
    /// Unfolded field value.
    pub value: String,
    /// Field lines exactly as parsed, folding and line endings included.
    /// `None` for fields added in code.
    pub raw: Option<String>,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) if raw.ends_with('\n') => write!(f, "{raw}"),
            Some(raw) => writeln!(f, "{raw}"),
            None => writeln!(f, "{}: {}", self.name, self.value),
        }
    }
}

/// Ordered collection of header fields.
///
/// Lookups ignore ASCII case; iteration and display keep the original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headers {
    fields: Vec<Header>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header value.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(Header {
            name: name.into(),
            value: value.into(),
            raw: None,
        });
    }

    /// Gets the first value for a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns an iterator over all headers in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|h| (h.name.as_str(), h.value.as_str()))
    }

    /// Returns the number of header fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no header fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses headers from raw text.
    ///
    /// Headers are in the format:
    /// ```text
    /// Header-Name: value
    ///   continuation
    /// ```
    ///
    /// Parsing stops at the first empty line. Lines without a colon and
    /// continuation lines with no preceding field are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut headers = Self::new();
        let mut current: Option<Header> = None;

        for line in text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\r', '\n']);
            if content.is_empty() {
                break;
            }

            // Continuation line (starts with space or tab)
            if content.starts_with([' ', '\t']) {
                if let Some(field) = current.as_mut() {
                    field.value.push(' ');
                    field.value.push_str(content.trim());
                    field.raw.get_or_insert_with(String::new).push_str(line);
                }
                continue;
            }

            headers.fields.extend(current.take().map(finish_field));

            if let Some((name, value)) = content.split_once(':') {
                current = Some(Header {
                    name: name.trim().to_string(),
                    value: value.trim().to_string(),
                    raw: Some(line.to_string()),
                });
            }
        }

        headers.fields.extend(current.map(finish_field));
        headers
    }

    /// Decodes a header value from RFC 2047 encoded words.
    ///
    /// Undecodable words are kept as they appear.
    #[must_use]
    pub fn decode_value(value: &str) -> String {
        decode_rfc2047(value).unwrap_or_else(|_| value.to_string())
    }
}

/// Trims the unfolded value once all continuation lines are in.
fn finish_field(mut field: Header) -> Header {
    field.value = field.value.trim().to_string();
    field
}

impl fmt::Display for Headers {
    /// Writes parsed fields as received and added fields as `Name: value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fields.iter().try_for_each(|field| write!(f, "{field}"))
    }
}
