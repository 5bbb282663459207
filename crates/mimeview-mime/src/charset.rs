//! Character set transcoding to UTF-8.
//!
//! Labels are resolved with the WHATWG Encoding Standard rules, so
//! `us-ascii` and `iso-8859-1` both map to windows-1252 (a strict superset).

use crate::error::{Error, Result};
use encoding_rs::{Encoding, REPLACEMENT, UTF_8};

/// Charset assumed when a text part declares none.
pub const DEFAULT_CHARSET: &str = "us-ascii";

/// Resolves a charset label, treating an empty label as [`DEFAULT_CHARSET`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharset`] for unknown labels and for labels
/// that only resolve to the WHATWG replacement decoder (such as
/// `iso-2022-kr`).
pub fn lookup(label: &str) -> Result<&'static Encoding> {
    let label = label.trim();
    let label = if label.is_empty() {
        DEFAULT_CHARSET
    } else {
        label
    };

    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding),
        _ => Err(Error::UnsupportedCharset(label.to_string())),
    }
}

/// Converts bytes in the declared charset to a UTF-8 string.
///
/// UTF-8 input passes through; malformed sequences in any charset become
/// U+FFFD rather than failing. A byte order mark is not interpreted, since
/// the declared charset wins.
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharset`] if the charset is not known.
pub fn transcode(bytes: &[u8], declared: &str) -> Result<String> {
    let encoding = lookup(declared)?;
    if encoding == UTF_8 {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}
