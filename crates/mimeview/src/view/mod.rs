//! View components, one per view-node kind.

mod alternative;
mod mixed;
mod text;

use iced::Element;
use mimeview_core::ViewNode;

use crate::message::{Message, NodePath};
use crate::state::ViewState;

/// Renders `node` and everything below it.
///
/// `path` locates the node in the tree; composite views extend it with the
/// child index when recursing.
pub fn view_node<'a>(
    node: &'a ViewNode,
    path: &[usize],
    state: &ViewState,
) -> Element<'a, Message> {
    match node {
        ViewNode::TextPlain { text: body } => text::view_plain(body),
        ViewNode::TextHtml { .. } => text::view_html(node),
        ViewNode::MultipartMixed { children } => mixed::view_mixed(children, path, state),
        ViewNode::MultipartAlternative { children } => {
            alternative::view_alternative(children, path, state)
        }
        ViewNode::Unknown { raw_dump } => text::view_raw(raw_dump),
    }
}

/// Path of the `index`-th child of the node at `path`.
fn child_path(path: &[usize], index: usize) -> NodePath {
    let mut child = path.to_vec();
    child.push(index);
    child
}
