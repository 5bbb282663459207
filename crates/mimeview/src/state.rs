//! Per-node UI state kept alongside the immutable view tree.

use std::collections::HashMap;

use mimeview_core::AttachmentVisibility;

use crate::message::NodePath;

/// Interactive state for one displayed message.
///
/// Entries are created lazily: a path with no entry is in its initial
/// state (attachment hidden, last alternative selected).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    attachments: HashMap<NodePath, AttachmentVisibility>,
    alternatives: HashMap<NodePath, usize>,
}

impl ViewState {
    /// Creates state with every attachment hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility of the attachment at `path`.
    pub fn visibility(&self, path: &[usize]) -> AttachmentVisibility {
        self.attachments.get(path).copied().unwrap_or_default()
    }

    /// Flips the attachment at `path` and returns its new visibility.
    pub fn toggle_attachment(&mut self, path: NodePath) -> AttachmentVisibility {
        let state = self.attachments.entry(path).or_default();
        *state = state.toggle();
        *state
    }

    /// Index of the alternative shown for the group at `path`.
    ///
    /// Defaults to the last of `count` alternatives. Stored selections past
    /// the end are clamped.
    pub fn selected_alternative(&self, path: &[usize], count: usize) -> usize {
        let last = count.saturating_sub(1);
        self.alternatives
            .get(path)
            .map_or(last, |&index| index.min(last))
    }

    /// Records the alternative shown for the group at `path`.
    pub fn select_alternative(&mut self, path: NodePath, index: usize) {
        self.alternatives.insert(path, index);
    }
}
