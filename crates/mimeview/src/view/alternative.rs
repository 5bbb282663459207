//! `multipart/alternative` view: a tab per rendering, one shown at a time.

use iced::widget::{Column, Row, button, text};
use iced::{Element, Length};
use mimeview_core::AlternativePart;

use super::{child_path, view_node};
use crate::message::Message;
use crate::state::ViewState;
use crate::style::tab_style;

/// Renders the label tabs and the selected alternative below them.
pub fn view_alternative<'a>(
    children: &'a [AlternativePart],
    path: &[usize],
    state: &ViewState,
) -> Element<'a, Message> {
    let selected = state.selected_alternative(path, children.len());

    let tabs: Vec<Element<'a, Message>> = children
        .iter()
        .enumerate()
        .map(|(index, alternative)| {
            button(text(alternative.label.as_str()).size(13))
                .padding([4, 10])
                .style(tab_style(index == selected))
                .on_press(Message::SelectAlternative(path.to_vec(), index))
                .into()
        })
        .collect();

    let mut content = Column::new()
        .push(Row::with_children(tabs).spacing(6))
        .spacing(10)
        .width(Length::Fill);

    if let Some(alternative) = children.get(selected) {
        content = content.push(view_node(
            &alternative.node,
            &child_path(path, selected),
            state,
        ));
    }

    content.into()
}
