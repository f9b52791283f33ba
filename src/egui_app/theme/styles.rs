//! Text Helpers
//!
//! Shorthands for the handful of text styles the views repeat.

use eframe::egui::{Color32, RichText};

use super::colors;

/// Section heading
pub fn heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).size(20.0).strong().color(colors::TEXT_DARK)
}

/// Card title
pub fn card_title(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).size(15.0).strong().color(colors::TEXT_DARK)
}

/// Secondary detail line
pub fn secondary(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).size(12.0).color(colors::TEXT_SECONDARY)
}

/// Price tag
pub fn price(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).size(14.0).strong().color(colors::ACCENT)
}

/// Error line
pub fn error(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(colors::ERROR)
}

/// Text over dark chrome
pub fn on_dark(text: impl Into<String>, color: Color32) -> RichText {
    RichText::new(text.into()).color(color)
}
