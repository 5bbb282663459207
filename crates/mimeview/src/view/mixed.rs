//! `multipart/mixed` view: parts stacked vertically, attachments collapsible.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use mimeview_core::MixedPart;

use super::{child_path, view_node};
use crate::message::{Message, NodePath};
use crate::state::ViewState;
use crate::style::attachment_style;

/// Renders the parts of a mixed group in order.
pub fn view_mixed<'a>(
    children: &'a [MixedPart],
    path: &[usize],
    state: &ViewState,
) -> Element<'a, Message> {
    let parts: Vec<Element<'a, Message>> = children
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let part_path = child_path(path, index);
            if part.is_attachment {
                view_attachment(part, part_path, state)
            } else {
                view_node(&part.node, &part_path, state)
            }
        })
        .collect();

    Column::with_children(parts)
        .spacing(12)
        .width(Length::Fill)
        .into()
}

/// Attachment frame: filename and a toggle, content only while shown.
fn view_attachment<'a>(
    part: &'a MixedPart,
    path: NodePath,
    state: &ViewState,
) -> Element<'a, Message> {
    let visibility = state.visibility(&path);

    let header = row![
        text("\u{1F4CE}").size(14), // paperclip
        text(part.filename().unwrap_or_default()).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        }),
        Space::new().width(Length::Fill),
        button(text(visibility.toggle_label()))
            .padding([4, 12])
            .style(button::secondary)
            .on_press(Message::ToggleAttachment(path.clone())),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(10);
    if visibility.is_shown() {
        content = content.push(view_node(&part.node, &path, state));
    }

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(attachment_style)
        .into()
}
