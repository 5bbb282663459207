//! Container and button styles derived from the active iced theme.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Corner radius shared by framed elements.
const RADIUS: f32 = 6.0;

/// Frame around an attachment: header row plus optional content.
pub fn attachment_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Sunken panel for raw entity dumps.
pub fn raw_dump_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Tab in an alternative group's label row; `active` marks the shown one.
pub fn tab_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();

        let (background, text_color) = if active {
            (palette.primary.base.color, palette.primary.base.text)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => (
                    palette.background.strong.color,
                    palette.background.strong.text,
                ),
                button::Status::Active | button::Status::Disabled => {
                    (Color::TRANSPARENT, palette.background.base.text)
                }
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette.primary.base.color,
                width: 1.0,
                radius: RADIUS.into(),
            },
            ..Default::default()
        }
    }
}
