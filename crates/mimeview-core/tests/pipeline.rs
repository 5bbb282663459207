//! End-to-end tests: raw message bytes through the parser and tree builder.

#![allow(clippy::unwrap_used, clippy::panic)]

use mimeview_core::{AttachmentVisibility, MixedPart, ViewNode, ViewNodeKind, build};
use mimeview_mime::{Entity, MAX_NESTING};
use proptest::prelude::*;

fn build_raw(raw: &str) -> ViewNode {
    build(&Entity::parse(raw.as_bytes()))
}

fn mixed_children(node: ViewNode) -> Vec<MixedPart> {
    match node {
        ViewNode::MultipartMixed { children } => children,
        other => panic!("expected multipart/mixed node, got {other:?}"),
    }
}

const NEWSLETTER: &str = concat!(
    "From: news@example.com\r\n",
    "To: reader@example.com\r\n",
    "Subject: =?utf-8?Q?Caf=C3=A9_news?=\r\n",
    "MIME-Version: 1.0\r\n",
    "Content-Type: multipart/mixed; boundary=\"outer\"\r\n",
    "\r\n",
    "This is a multi-part message in MIME format.\r\n",
    "--outer\r\n",
    "Content-Type: multipart/alternative; boundary=\"inner\"\r\n",
    "\r\n",
    "--inner\r\n",
    "Content-Type: text/plain; charset=iso-8859-1\r\n",
    "Content-Transfer-Encoding: quoted-printable\r\n",
    "\r\n",
    "Caf=E9 opens at nine. This line is long enough that it was wrapped by t=\r\n",
    "he encoder.\r\n",
    "--inner\r\n",
    "Content-Type: text/html; charset=utf-8\r\n",
    "Content-Transfer-Encoding: base64\r\n",
    "\r\n",
    "PHA+Q2Fmw6k8L3A+\r\n",
    "--inner--\r\n",
    "\r\n",
    "--outer\r\n",
    "Content-Type: application/pdf; name=\"menu.pdf\"\r\n",
    "Content-Disposition: attachment; filename=\"menu.pdf\"\r\n",
    "Content-Transfer-Encoding: base64\r\n",
    "\r\n",
    "JVBERi0xLjQK\r\n",
    "--outer\r\n",
    "Content-Type: text/plain\r\n",
    "Content-Disposition: attachment\r\n",
    "\r\n",
    "notes\r\n",
    "--outer--\r\n",
);

#[test]
fn newsletter_structure() {
    let root = build_raw(NEWSLETTER);
    assert_eq!(root.attachment_count(), 2);

    let children = mixed_children(root);
    assert_eq!(children.len(), 3);

    // Inline alternative with both renderings, in source order
    assert!(!children[0].is_attachment);
    let ViewNode::MultipartAlternative { children: alternatives } = &children[0].node else {
        panic!("expected multipart/alternative first");
    };
    let labels: Vec<&str> = alternatives.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, ["text/plain", "text/html"]);
    assert_eq!(
        alternatives[0].node,
        ViewNode::TextPlain {
            text: "Café opens at nine. This line is long enough that it was wrapped by the encoder."
                .to_string()
        }
    );
    assert_eq!(
        alternatives[1].node,
        ViewNode::TextHtml {
            html: "<p>Café</p>".as_bytes().to_vec(),
            charset: "utf-8".to_string(),
        }
    );

    // Binary attachment falls back to a raw dump
    assert!(children[1].is_attachment);
    assert_eq!(children[1].filename(), Some("menu.pdf"));
    let ViewNode::Unknown { raw_dump } = &children[1].node else {
        panic!("expected raw dump for the pdf");
    };
    assert!(raw_dump.starts_with("Content-Type: application/pdf; name=\"menu.pdf\"\r\n"));
    assert!(raw_dump.contains("JVBERi0xLjQK"));

    // Text attachment without a filename
    assert!(children[2].is_attachment);
    assert_eq!(children[2].filename(), Some("unknown"));
    assert_eq!(
        children[2].node,
        ViewNode::TextPlain {
            text: "notes".to_string()
        }
    );
}

#[test]
fn malformed_part_is_isolated() {
    let raw = concat!(
        "Content-Type: multipart/mixed; boundary=b\n",
        "\n",
        "--b\n",
        "Content-Type: text/plain\n",
        "Content-Transfer-Encoding: base64\n",
        "\n",
        "AAA!\n",
        "--b\n",
        "Content-Type: text/plain; charset=x-nonexistent\n",
        "\n",
        "still readable\n",
        "--b\n",
        "Content-Type: text/plain\n",
        "\n",
        "fine\n",
        "--b--\n",
    );

    let children = mixed_children(build_raw(raw));
    let texts: Vec<&str> = children
        .iter()
        .map(|part| match &part.node {
            ViewNode::TextPlain { text } => text.as_str(),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    assert_eq!(texts, ["AAA!", "still readable", "fine"]);
}

#[test]
fn related_and_signed_are_dumped() {
    for subtype in ["related", "signed", "x-custom"] {
        let raw = format!(
            "Content-Type: multipart/{subtype}; boundary=z\n\n--z\nContent-Type: text/plain\n\nhi\n--z--\n"
        );
        let node = build_raw(&raw);
        assert_eq!(node.kind(), ViewNodeKind::Unknown, "multipart/{subtype}");
    }
}

#[test]
fn multipart_without_boundary_keeps_body() {
    let raw = "Content-Type: multipart/mixed\n\nImportant text that must be shown\n";
    assert_eq!(
        build_raw(raw),
        ViewNode::Unknown {
            raw_dump: raw.to_string()
        }
    );
}

#[test]
fn nesting_past_parser_limit_keeps_innermost_text() {
    let mut raw = String::from("Content-Type: text/plain\n\nDEEP-LEAF\n");
    for level in 0..=MAX_NESTING {
        raw = format!(
            "Content-Type: multipart/mixed; boundary=l{level}\n\n--l{level}\n{raw}\n--l{level}--\n"
        );
    }

    let mut node = build_raw(&raw);
    let mut depth = 0;
    while let ViewNode::MultipartMixed { mut children } = node {
        assert_eq!(children.len(), 1);
        node = children.remove(0).node;
        depth += 1;
    }

    assert_eq!(depth, MAX_NESTING);
    let ViewNode::Unknown { raw_dump } = node else {
        panic!("expected raw dump below the nesting limit");
    };
    assert!(raw_dump.contains("DEEP-LEAF"));
}

#[test]
fn raw_dump_keeps_folded_headers() {
    let raw = concat!(
        "Content-Type: multipart/related;\r\n",
        "\tboundary=\"rel\"\r\n",
        "X-Mailer:   folded\r\n",
        "  mailer\r\n",
        "\r\n",
        "--rel\r\n",
        "Content-Type: text/html\r\n",
        "\r\n",
        "<img src=cid:1>\r\n",
        "--rel--\r\n",
    );
    let ViewNode::Unknown { raw_dump } = build_raw(raw) else {
        panic!("expected raw dump for multipart/related");
    };
    assert!(raw_dump.starts_with(concat!(
        "Content-Type: multipart/related;\r\n",
        "\tboundary=\"rel\"\r\n",
        "X-Mailer:   folded\r\n",
        "  mailer\r\n",
        "\n",
        "--rel\n",
        "Content-Type: text/html\r\n",
    )));
    assert!(raw_dump.contains("<img src=cid:1>"));
}

#[test]
fn message_without_content_type_is_dumped() {
    let node = build_raw("Subject: bare\n\nJust text.\n");
    assert_eq!(
        node,
        ViewNode::Unknown {
            raw_dump: "Subject: bare\n\nJust text.\n".to_string()
        }
    );
}

#[test]
fn attachment_visibility_cycle() {
    let mut state = AttachmentVisibility::default();
    assert!(!state.is_shown());
    state = state.toggle();
    assert!(state.is_shown());
    state = state.toggle();
    assert_eq!(state, AttachmentVisibility::Hidden);
}

proptest! {
    #[test]
    fn mixed_preserves_child_count_and_order(bodies in proptest::collection::vec("[a-z]{1,12}", 0..8)) {
        let mut raw = String::from("Content-Type: multipart/mixed; boundary=sep\n\n");
        for body in &bodies {
            raw.push_str("--sep\nContent-Type: text/plain\n\n");
            raw.push_str(body);
            raw.push('\n');
        }
        raw.push_str("--sep--\n");

        let children = mixed_children(build_raw(&raw));
        prop_assert_eq!(children.len(), bodies.len());
        for (part, body) in children.iter().zip(&bodies) {
            prop_assert!(!part.is_attachment);
            prop_assert_eq!(&part.node, &ViewNode::TextPlain { text: body.clone() });
        }
    }

    #[test]
    fn attachment_filename_matches_parameter(name in "[A-Za-z0-9_.-]{0,20}") {
        let raw = format!(
            "Content-Type: multipart/mixed; boundary=sep\n\n--sep\nContent-Type: application/octet-stream\nContent-Disposition: attachment; filename=\"{name}\"\n\ndata\n--sep--\n"
        );
        let children = mixed_children(build_raw(&raw));
        let expected = if name.is_empty() { "unknown" } else { name.as_str() };
        prop_assert!(children[0].is_attachment);
        prop_assert_eq!(children[0].filename(), Some(expected));
    }

    #[test]
    fn build_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = build(&Entity::parse(&data));
    }
}
