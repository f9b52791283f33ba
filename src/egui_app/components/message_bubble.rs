//! Message Bubble Component
//!
//! Displays a single message bubble with content and timestamp.

use chrono::{DateTime, Local, Utc};
use eframe::egui;

use crate::egui_app::theme::colors;
use crate::shared::messaging::ChatMessage;

/// Render a message bubble
pub fn render(ui: &mut egui::Ui, message: &ChatMessage, is_own_message: bool) {
    let (bg_color, align) = if is_own_message {
        (colors::BUBBLE_OUTGOING, egui::Align::RIGHT)
    } else {
        (colors::BUBBLE_INCOMING, egui::Align::LEFT)
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        // Limit bubble width
        let max_width = ui.available_width() * 0.7;

        ui.allocate_ui_with_layout(
            egui::vec2(max_width, 0.0),
            egui::Layout::top_down(align),
            |ui| {
                egui::Frame::new()
                    .fill(bg_color)
                    .corner_radius(egui::CornerRadius {
                        nw: if is_own_message { 12 } else { 4 },
                        ne: if is_own_message { 4 } else { 12 },
                        sw: 12,
                        se: 12,
                    })
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&message.text).color(colors::TEXT_DARK),
                        );
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            format_time(message.created_at),
                        );
                    });
            },
        );
    });

    ui.add_space(4.0);
}

/// Format a timestamp as local HH:MM
fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}
