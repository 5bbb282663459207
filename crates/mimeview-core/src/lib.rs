//! # mimeview-core
//!
//! Turns a parsed MIME entity tree into a tree of renderable view nodes.
//!
//! This crate provides:
//! - **Classification** of entities by content type
//! - **Body decoding** of transfer encodings and charsets, with lenient
//!   fallbacks so a malformed part never aborts the build
//! - **Tree building** that mirrors the message structure and marks
//!   attachments inside `multipart/mixed`
//! - **Attachment visibility**, the show/hide state a renderer keeps per
//!   attachment
//!
//! # Example
//!
//! ```
//! use mimeview_core::{ViewNode, build};
//! use mimeview_mime::Entity;
//!
//! let raw = b"Content-Type: multipart/alternative; boundary=b\r\n\r\n\
//!             --b\r\nContent-Type: text/plain\r\n\r\nhi\r\n\
//!             --b\r\nContent-Type: text/html\r\n\r\n<b>hi</b>\r\n\
//!             --b--\r\n";
//!
//! let ViewNode::MultipartAlternative { children } = build(&Entity::parse(raw)) else {
//!     unreachable!();
//! };
//! assert_eq!(children[0].label, "text/plain");
//! assert_eq!(children[1].label, "text/html");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod builder;
mod classify;
mod config;
pub mod decode;
mod node;
mod visibility;

pub use builder::{TreeBuilder, build};
pub use classify::{classify, classify_content_type};
pub use config::BuildConfig;
pub use node::{AlternativePart, AttachmentMeta, MixedPart, ViewNode, ViewNodeKind};
pub use visibility::AttachmentVisibility;
