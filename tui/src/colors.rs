//! Shared palette for the detector UI.

use ratatui::style::Color;

pub(crate) fn text_dim() -> Color {
    Color::DarkGray
}

pub(crate) fn border() -> Color {
    Color::DarkGray
}

pub(crate) fn primary() -> Color {
    Color::Cyan
}

pub(crate) fn success() -> Color {
    Color::Green
}

pub(crate) fn error() -> Color {
    Color::Red
}

pub(crate) fn warning() -> Color {
    Color::Yellow
}
