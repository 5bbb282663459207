//! MIME content type and content disposition handling.

use crate::error::{Error, Result};
use std::fmt;

/// Ordered `name=value` parameter list attached to a structured header.
///
/// Names are lowercased on parse; lookups are case-insensitive and return the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters(Vec<(String, String)>);

impl Parameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into().to_lowercase(), value.into()));
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over parameters in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.0 {
            // Quote value if it contains special characters
            if value.is_empty()
                || value.contains(|c: char| c.is_whitespace() || "()<>@,;:\\\"/[]?=".contains(c))
            {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "; {key}=\"{escaped}\"")?;
            } else {
                write!(f, "; {key}={value}")?;
            }
        }
        Ok(())
    }
}

/// MIME content type with parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentType {
    /// Main type (e.g., "text", "image", "multipart").
    pub main_type: String,
    /// Subtype (e.g., "plain", "html", "jpeg").
    pub sub_type: String,
    /// Parameters (e.g., charset=utf-8, boundary=xxx), in header order.
    pub parameters: Parameters,
}

impl ContentType {
    /// Creates a new content type.
    #[must_use]
    pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            main_type: main_type.into(),
            sub_type: sub_type.into(),
            parameters: Parameters::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(key, value);
        self
    }

    /// Returns a parameter value by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// Returns the charset parameter if present.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// Returns the boundary parameter if present.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.parameter("boundary")
    }

    /// Returns `type/subtype` without parameters.
    #[must_use]
    pub fn mime_type(&self) -> String {
        format!("{}/{}", self.main_type, self.sub_type)
    }

    /// Checks if this is a multipart content type.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.main_type.eq_ignore_ascii_case("multipart")
    }

    /// Checks if this is a text content type.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.main_type.eq_ignore_ascii_case("text")
    }

    /// Parses a content type string.
    ///
    /// Format: `type/subtype; param1=value1; param2="value 2"`
    ///
    /// # Errors
    ///
    /// Returns an error if the type or subtype is missing.
    pub fn parse(s: &str) -> Result<Self> {
        let (type_str, parameters) = split_parameters(s);

        let (main_type, sub_type) = type_str
            .split_once('/')
            .ok_or_else(|| Error::InvalidContentType(format!("Missing subtype in {s:?}")))?;

        let main_type = main_type.trim().to_lowercase();
        let sub_type = sub_type.trim().to_lowercase();

        if main_type.is_empty() || sub_type.is_empty() {
            return Err(Error::InvalidContentType(format!("Empty type in {s:?}")));
        }

        Ok(Self {
            main_type,
            sub_type,
            parameters,
        })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = &self.main_type;
        let sub = &self.sub_type;
        write!(f, "{main}/{sub}{}", self.parameters)
    }
}

/// Content disposition (`inline`, `attachment`, ...) with parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentDisposition {
    /// Disposition kind, lowercased.
    pub kind: String,
    /// Parameters (e.g., filename), in header order.
    pub parameters: Parameters,
}

impl ContentDisposition {
    /// Creates a disposition without parameters.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            parameters: Parameters::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(key, value);
        self
    }

    /// Returns `true` for the `attachment` kind.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        self.kind.eq_ignore_ascii_case("attachment")
    }

    /// Returns the raw filename parameter if present.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.parameters.get("filename")
    }

    /// Parses a content disposition string.
    ///
    /// Format: `attachment; filename="report.pdf"`
    ///
    /// # Errors
    ///
    /// Returns an error if the disposition kind is empty.
    pub fn parse(s: &str) -> Result<Self> {
        let (kind, parameters) = split_parameters(s);
        let kind = kind.trim().to_lowercase();

        if kind.is_empty() {
            return Err(Error::InvalidContentType(format!(
                "Empty disposition in {s:?}"
            )));
        }

        Ok(Self { kind, parameters })
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.parameters)
    }
}

/// Splits `value; a=b; c="d;e"` into its leading token and parameters.
///
/// Semicolons inside quoted strings do not split; backslash escapes inside
/// quotes are resolved. Segments without `=` are ignored.
fn split_parameters(s: &str) -> (&str, Parameters) {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&s[start..]);

    let mut iter = segments.into_iter();
    let head = iter.next().unwrap_or_default().trim();

    let mut parameters = Parameters::new();
    for segment in iter {
        if let Some((key, value)) = segment.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            parameters.push(key, unquote(value.trim()));
        }
    }

    (head, parameters)
}

/// Removes surrounding quotes and resolves backslash escapes.
fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .map(|rest| rest.strip_suffix('"').unwrap_or(rest))
    else {
        return value.to_string();
    };

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(ch);
        }
    }
    result
}
