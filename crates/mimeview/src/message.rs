//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

/// Position of a node in the view tree: child indices from the root.
///
/// The root itself is the empty path.
pub type NodePath = Vec<usize>;

/// Application messages (events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Show or hide the attachment at this path.
    ToggleAttachment(NodePath),
    /// Switch the alternative group at this path to the given child.
    SelectAlternative(NodePath, usize),
}
