//! Shared widget styles
//!
//! Flat gruvbox-flavored palette and the style helpers the view uses.

use iced::widget::{button, container};
use iced::{Border, Color};

pub const BG_BASE: Color = Color {
    r: 0.157,
    g: 0.157,
    b: 0.157,
    a: 1.0,
};
pub const BG_SURFACE: Color = Color {
    r: 0.196,
    g: 0.188,
    b: 0.184,
    a: 1.0,
};
pub const BORDER: Color = Color {
    r: 0.312,
    g: 0.284,
    b: 0.269,
    a: 1.0,
};
pub const TEXT_BRIGHT: Color = Color {
    r: 0.922,
    g: 0.859,
    b: 0.698,
    a: 1.0,
};
pub const TEXT_DIM: Color = Color {
    r: 0.659,
    g: 0.600,
    b: 0.518,
    a: 1.0,
};
pub const ACCENT: Color = Color {
    r: 0.514,
    g: 0.647,
    b: 0.596,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 0.984,
    g: 0.286,
    b: 0.204,
    a: 1.0,
};

pub fn main_container(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(BG_BASE.into()),
        text_color: Some(TEXT_BRIGHT),
        ..Default::default()
    }
}

pub fn card_container(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(BG_SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.85, ..ACCENT },
        _ => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: BG_BASE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn secondary_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BG_SURFACE,
        _ => BG_BASE,
    };
    button::Style {
        background: Some(background.into()),
        text_color: TEXT_BRIGHT,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
