//! `mimeview` - Desktop viewer for a single MIME message
//!
//! Reads one message from stdin, builds its view tree and shows it in a
//! window until closed.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod state;
mod style;
mod view;

use std::io::Read;

use anyhow::Context;
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Task};
use mimeview_core::{ViewNode, build};
use mimeview_mime::{Entity, Headers};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::Message;
use state::ViewState;

/// Window title when the message has no usable subject.
const DEFAULT_TITLE: &str = "mimeview";

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mimeview=info,mimeview_core=info,mimeview_mime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mimeview");

    let raw = read_stdin().unwrap_or_else(|e| {
        error!("{:#}", e);
        Vec::new()
    });

    let entity = Entity::parse(&raw);
    let subject = subject_of(&entity);
    let root = build(&entity);
    info!(
        bytes = raw.len(),
        kind = root.kind().as_str(),
        attachments = root.attachment_count(),
        "Message loaded"
    );

    iced::application(
        move || MimeView::new(root.clone(), subject.clone()),
        MimeView::update,
        MimeView::view,
    )
    .title(MimeView::title)
    .window_size((800.0, 600.0))
    .run()
}

/// Reads the complete message from standard input.
fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut raw = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut raw)
        .context("Failed to read message from stdin")?;
    Ok(raw)
}

/// Decoded, non-blank `Subject` header of the top-level entity.
fn subject_of(entity: &Entity) -> Option<String> {
    entity
        .headers()
        .get("subject")
        .map(Headers::decode_value)
        .map(|subject| subject.trim().to_string())
        .filter(|subject| !subject.is_empty())
}

/// Main application state.
struct MimeView {
    /// View tree of the displayed message.
    root: ViewNode,
    /// Decoded subject, used as heading and window title.
    subject: Option<String>,
    /// Attachment and alternative selections.
    state: ViewState,
}

impl MimeView {
    /// Create new application instance.
    fn new(root: ViewNode, subject: Option<String>) -> (Self, Task<Message>) {
        let app = Self {
            root,
            subject,
            state: ViewState::new(),
        };
        (app, Task::none())
    }

    /// Update state based on message.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleAttachment(path) => {
                let visibility = self.state.toggle_attachment(path.clone());
                info!(?path, shown = visibility.is_shown(), "Attachment toggled");
            }
            Message::SelectAlternative(path, index) => {
                self.state.select_alternative(path, index);
            }
        }
        Task::none()
    }

    fn title(&self) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let heading = text(self.subject.as_deref().unwrap_or(DEFAULT_TITLE))
            .size(20)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let body = scrollable(
            container(view::view_node(&self.root, &[], &self.state))
                .padding([0, 12])
                .width(Length::Fill),
        )
        .height(Length::Fill);

        column![heading, body]
            .spacing(16)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
