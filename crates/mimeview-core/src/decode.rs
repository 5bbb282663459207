//! Body decoding: transfer encodings, then character sets.

use mimeview_mime::encoding::{decode_base64, decode_quoted_printable};
use mimeview_mime::{Result, TransferEncoding, charset};

/// Undoes the transfer encoding of a raw body.
///
/// `None` and the identity mechanisms (7bit, 8bit, binary, and anything
/// unrecognized) return the bytes unchanged.
///
/// # Errors
///
/// Returns a decode error when the body is not valid base64 or
/// quoted-printable as declared.
pub fn decode_transfer(raw: &[u8], encoding: Option<TransferEncoding>) -> Result<Vec<u8>> {
    match encoding {
        Some(TransferEncoding::Base64) => decode_base64(raw),
        Some(TransferEncoding::QuotedPrintable) => decode_quoted_printable(raw),
        _ => Ok(raw.to_vec()),
    }
}

/// Converts decoded bytes to text.
///
/// An empty charset means `us-ascii`; UTF-8 passes through with invalid
/// sequences replaced.
///
/// # Errors
///
/// Returns [`mimeview_mime::Error::UnsupportedCharset`] for unknown charsets.
pub fn transcode_charset(bytes: &[u8], declared_charset: &str) -> Result<String> {
    charset::transcode(bytes, declared_charset)
}

/// Reinterprets bytes as UTF-8, replacing invalid sequences.
#[must_use]
pub fn lossy_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mimeview_mime::Error;
    use proptest::prelude::*;
    use std::fmt::Write as _;

    /// Minimal quoted-printable encoder for round-trip checks.
    fn encode_qp(text: &str) -> String {
        let mut out = String::new();
        let mut line_length = 0;
        for byte in text.bytes() {
            if line_length >= 73 {
                out.push_str("=\r\n");
                line_length = 0;
            }
            if matches!(byte, b'!'..=b'<' | b'>'..=b'~' | b' ') {
                out.push(char::from(byte));
                line_length += 1;
            } else {
                write!(out, "={byte:02X}").unwrap();
                line_length += 3;
            }
        }
        out
    }

    #[test]
    fn test_identity_without_encoding() {
        let raw = b"=41 not decoded \xFF";
        assert_eq!(decode_transfer(raw, None).unwrap(), raw);
        assert_eq!(
            decode_transfer(raw, Some(TransferEncoding::EightBit)).unwrap(),
            raw
        );
        assert_eq!(
            decode_transfer(raw, Some(TransferEncoding::parse("x-custom"))).unwrap(),
            raw
        );
    }

    #[test]
    fn test_quoted_printable() {
        let bytes =
            decode_transfer(b"Caf=E9", Some(TransferEncoding::QuotedPrintable)).unwrap();
        assert_eq!(bytes, b"Caf\xE9");
        assert_eq!(transcode_charset(&bytes, "iso-8859-1").unwrap(), "Café");
    }

    #[test]
    fn test_base64() {
        let bytes = decode_transfer(b"SGVsbG8=\r\n", Some(TransferEncoding::Base64)).unwrap();
        assert_eq!(bytes, b"Hello");
    }

    #[test]
    fn test_base64_corrupted() {
        let err = decode_transfer(b"AAA!", Some(TransferEncoding::Base64)).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_transcode_default_and_unsupported() {
        assert_eq!(transcode_charset(b"abc", "").unwrap(), "abc");
        assert!(matches!(
            transcode_charset(b"abc", "x-klingon"),
            Err(Error::UnsupportedCharset(_))
        ));
    }

    #[test]
    fn test_lossy_text() {
        assert_eq!(lossy_text(b"a\xFFb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_encode_qp_helper() {
        assert_eq!(encode_qp("a=b"), "a=3Db");
    }

    proptest! {
        #[test]
        fn no_encoding_is_identity(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(decode_transfer(&data, None).unwrap(), data);
        }

        #[test]
        fn quoted_printable_round_trip(s in "[a-zA-Z0-9 .,:;!?'()-]{0,300}") {
            let encoded = encode_qp(&s);
            let decoded = decode_transfer(encoded.as_bytes(), Some(TransferEncoding::QuotedPrintable)).unwrap();
            prop_assert_eq!(decoded, s.as_bytes());
        }
    }
}
