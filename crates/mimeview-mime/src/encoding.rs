//! MIME transfer decoding utilities.
//!
//! Supports Base64, Quoted-Printable, and RFC 2047 encoded words. Only
//! decoding is provided.

use crate::charset;
use crate::error::{Error, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet engine that accepts both padded and unpadded input.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes Base64 data.
///
/// Whitespace (including line breaks) is ignored and padding is optional.
///
/// # Errors
///
/// Returns an error if the input contains bytes outside the standard
/// alphabet or has an impossible length.
pub fn decode_base64(data: &[u8]) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = data
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    LENIENT_BASE64.decode(cleaned).map_err(Into::into)
}

/// Decodes Quoted-Printable data (RFC 2045).
///
/// `=XX` escapes become the byte `XX`; `=` at the end of a line (optionally
/// followed by transport padding) is a soft line break and is removed.
///
/// # Errors
///
/// Returns an error if an `=` is followed by anything other than two hex
/// digits or a line break.
pub fn decode_quoted_printable(data: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        if byte != b'=' {
            result.push(byte);
            i += 1;
            continue;
        }

        // Soft line break, possibly with trailing whitespace before the newline
        let rest = &data[i + 1..];
        let padding = rest
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t'))
            .count();
        match &rest[padding..] {
            [] => break,
            [b'\n', ..] => {
                i += 1 + padding + 1;
                continue;
            }
            [b'\r', b'\n', ..] => {
                i += 1 + padding + 2;
                continue;
            }
            _ => {}
        }

        match rest {
            [hi, lo, ..] => {
                let (Some(hi), Some(lo)) = (hex_value(*hi), hex_value(*lo)) else {
                    return Err(Error::InvalidEncoding(format!(
                        "Invalid escape sequence at offset {i}"
                    )));
                };
                result.push((hi << 4) | lo);
                i += 3;
            }
            _ => {
                return Err(Error::InvalidEncoding(
                    "Incomplete escape sequence".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decodes RFC 2047 encoded words inside a header value.
///
/// Format: `=?charset?encoding?encoded-text?=`. Text outside encoded words is
/// kept as is; whitespace between two adjacent encoded words is dropped.
///
/// # Errors
///
/// Returns an error if an encoded word uses an unknown encoding, carries
/// malformed data, or names an unsupported charset.
pub fn decode_rfc2047(text: &str) -> Result<String> {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    let mut pending_space = "";
    let mut last_was_word = false;

    while let Some(start) = rest.find("=?") {
        let Some((word, consumed)) = split_encoded_word(&rest[start..]) else {
            // Not an encoded word; copy through the marker and move on
            result.push_str(pending_space);
            result.push_str(&rest[..start + 2]);
            pending_space = "";
            last_was_word = false;
            rest = &rest[start + 2..];
            continue;
        };

        let between = &rest[..start];
        if !(last_was_word && between.trim().is_empty()) {
            result.push_str(pending_space);
            result.push_str(between);
        }

        result.push_str(&decode_encoded_word(word)?);
        rest = &rest[start + consumed..];

        let trailing = rest.len() - rest.trim_start().len();
        pending_space = &rest[..trailing];
        rest = &rest[trailing..];
        last_was_word = true;
    }

    result.push_str(pending_space);
    result.push_str(rest);
    Ok(result)
}

/// Splits `=?cs?e?text?=...` into the inner `cs?e?text` and the length of
/// the whole word.
fn split_encoded_word(s: &str) -> Option<(&str, usize)> {
    let inner = s.strip_prefix("=?")?;
    let charset_end = inner.find('?')?;
    let encoding_end = charset_end + 1 + inner[charset_end + 1..].find('?')?;
    let text_end = encoding_end + 1 + inner[encoding_end + 1..].find("?=")?;
    Some((&inner[..text_end], 2 + text_end + 2))
}

fn decode_encoded_word(word: &str) -> Result<String> {
    let mut parts = word.splitn(3, '?');
    let (Some(charset_name), Some(encoding), Some(encoded_text)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidEncoding(
            "Invalid RFC 2047 format".to_string(),
        ));
    };

    // RFC 2231 language suffix: charset*lang
    let charset_name = charset_name.split('*').next().unwrap_or(charset_name);

    let bytes = match encoding {
        "B" | "b" => decode_base64(encoded_text.as_bytes())?,
        // Quoted-Printable with underscore for space
        "Q" | "q" => decode_quoted_printable(encoded_text.replace('_', " ").as_bytes())?,
        _ => {
            return Err(Error::InvalidEncoding(format!(
                "Unknown encoding: {encoding}"
            )));
        }
    };

    charset::transcode(&bytes, charset_name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base64_decode() {
        let decoded = decode_base64(b"SGVsbG8sIFdvcmxkIQ==").unwrap();
        assert_eq!(decoded, b"Hello, World!");
    }

    #[test]
    fn test_base64_decode_lenient() {
        // Missing padding and folded lines are both fine
        assert_eq!(decode_base64(b"SGVsbG8").unwrap(), b"Hello");
        assert_eq!(decode_base64(b"SGVs\r\nbG8=\r\n").unwrap(), b"Hello");
        assert_eq!(decode_base64(b"AAAA").unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_base64_decode_invalid() {
        let err = decode_base64(b"AAA!").unwrap_err();
        assert!(err.is_decode_error());
        assert!(decode_base64(b"AAAAA").is_err());
    }

    #[test]
    fn test_quoted_printable_decode() {
        let decoded = decode_quoted_printable(b"Hello, World!").unwrap();
        assert_eq!(decoded, b"Hello, World!");

        let decoded = decode_quoted_printable(b"H=C3=A9llo").unwrap();
        assert_eq!(decoded, "Héllo".as_bytes());

        let decoded = decode_quoted_printable(b"Caf=e9").unwrap();
        assert_eq!(decoded, b"Caf\xE9");
    }

    #[test]
    fn test_quoted_printable_soft_line_break() {
        assert_eq!(
            decode_quoted_printable(b"Hello=\r\nWorld").unwrap(),
            b"HelloWorld"
        );
        assert_eq!(
            decode_quoted_printable(b"Hello=\nWorld").unwrap(),
            b"HelloWorld"
        );
        assert_eq!(
            decode_quoted_printable(b"Hello= \t\r\nWorld").unwrap(),
            b"HelloWorld"
        );
        assert_eq!(decode_quoted_printable(b"Hello=").unwrap(), b"Hello");
    }

    #[test]
    fn test_quoted_printable_keeps_hard_breaks() {
        let decoded = decode_quoted_printable(b"line one\r\nline two").unwrap();
        assert_eq!(decoded, b"line one\r\nline two");
    }

    #[test]
    fn test_quoted_printable_invalid() {
        assert!(decode_quoted_printable(b"bad =ZZ escape").unwrap_err().is_decode_error());
        assert!(decode_quoted_printable(b"short =A").is_err());
    }

    #[test]
    fn test_rfc2047_decode() {
        assert_eq!(decode_rfc2047("Hello").unwrap(), "Hello");
        assert_eq!(decode_rfc2047("=?utf-8?B?SMOpbGxv?=").unwrap(), "Héllo");
    }

    #[test]
    fn test_rfc2047_quoted_printable() {
        assert_eq!(decode_rfc2047("=?utf-8?Q?H=C3=A9llo?=").unwrap(), "Héllo");
        assert_eq!(
            decode_rfc2047("=?ISO-8859-1?Q?r=E9sum=E9_final.pdf?=").unwrap(),
            "résumé final.pdf"
        );
    }

    #[test]
    fn test_rfc2047_mixed_text() {
        assert_eq!(
            decode_rfc2047("Re: =?utf-8?Q?caf=C3=A9?= =?utf-8?Q?_au_lait?= now").unwrap(),
            "Re: café au lait now"
        );
        assert_eq!(decode_rfc2047("a =? b").unwrap(), "a =? b");
    }

    #[test]
    fn test_rfc2047_errors() {
        assert!(decode_rfc2047("=?utf-8?X?abc?=").is_err());
        assert!(matches!(
            decode_rfc2047("=?x-unknown?Q?abc?="),
            Err(Error::UnsupportedCharset(_))
        ));
    }

    proptest! {
        #[test]
        fn quoted_printable_passes_plain_ascii(s in "[a-zA-Z0-9 .,!?-]{0,200}") {
            prop_assert_eq!(decode_quoted_printable(s.as_bytes()).unwrap(), s.as_bytes());
        }

        #[test]
        fn quoted_printable_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let _ = decode_quoted_printable(&data);
        }
    }
}
