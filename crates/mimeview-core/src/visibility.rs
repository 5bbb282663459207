//! Show/hide state for attachment wrappers.

/// Visibility of one attachment's content.
///
/// The renderer keeps one value per attachment and re-renders after each
/// [`toggle`](Self::toggle). Starts out [`Hidden`](Self::Hidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachmentVisibility {
    /// Content is collapsed; only the attachment header is shown.
    #[default]
    Hidden,
    /// Content is mounted below the attachment header.
    Shown,
}

impl AttachmentVisibility {
    /// Flips between hidden and shown.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Returns `true` when the wrapped content should be displayed.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// Label for the control that performs the next toggle.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Hidden => "Show",
            Self::Shown => "Hide",
        }
    }
}
