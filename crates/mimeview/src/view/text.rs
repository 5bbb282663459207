//! Leaf views: plain text, HTML and raw dumps.

use iced::widget::{container, text};
use iced::{Element, Font, Length};
use mimeview_core::ViewNode;

use crate::message::Message;
use crate::style::raw_dump_style;

/// Renders decoded plain text.
pub fn view_plain(body: &str) -> Element<'_, Message> {
    text(body).size(14).width(Length::Fill).into()
}

/// Renders an HTML node as readable Markdown-style text.
pub fn view_html(node: &ViewNode) -> Element<'static, Message> {
    let source = node.html_text().unwrap_or_default();
    text(readable_html(&source)).size(14).width(Length::Fill).into()
}

/// Renders an undecoded entity dump in a monospace panel.
pub fn view_raw(raw_dump: &str) -> Element<'_, Message> {
    container(text(raw_dump).font(Font::MONOSPACE).size(12))
        .padding(10)
        .width(Length::Fill)
        .style(raw_dump_style)
        .into()
}

/// Converts HTML to Markdown text, or returns the source unchanged if the
/// conversion fails.
pub fn readable_html(source: &str) -> String {
    htmd::convert(source).unwrap_or_else(|e| {
        tracing::warn!("HTML conversion failed, showing source: {}", e);
        source.to_string()
    })
}
