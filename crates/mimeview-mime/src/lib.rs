//! # mimeview-mime
//!
//! MIME entity model and decoding primitives for message viewers.
//!
//! ## Features
//!
//! - **Entity tree**: headers plus either a raw body or ordered children
//! - **Typed accessors**: content type, content disposition, transfer encoding
//! - **Decoding**: Base64, Quoted-Printable, RFC 2047 encoded words
//! - **Charsets**: transcoding of declared charsets to UTF-8
//! - **Parsing**: a lenient wire-format parser that never rejects input
//!
//! ## Quick Start
//!
//! ```
//! use mimeview_mime::{Entity, TransferEncoding};
//!
//! let raw = b"Content-Type: text/plain; charset=iso-8859-1\r\n\
//!             Content-Transfer-Encoding: quoted-printable\r\n\
//!             \r\n\
//!             Caf=E9";
//!
//! let entity = Entity::parse(raw);
//! assert_eq!(entity.transfer_encoding(), Some(TransferEncoding::QuotedPrintable));
//!
//! let bytes = mimeview_mime::encoding::decode_quoted_printable(entity.body().unwrap_or_default())?;
//! let charset = entity.content_type().and_then(|ct| ct.charset().map(str::to_string));
//! let text = mimeview_mime::charset::transcode(&bytes, charset.as_deref().unwrap_or_default())?;
//! assert_eq!(text, "Café");
//! # Ok::<(), mimeview_mime::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod content_type;
mod entity;
mod error;
mod header;
mod parse;

pub mod charset;
pub mod encoding;

pub use content_type::{ContentDisposition, ContentType, Parameters};
pub use entity::{Content, Entity, TransferEncoding};
pub use error::{Error, Result};
pub use header::{Header, Headers};
pub use parse::MAX_NESTING;
