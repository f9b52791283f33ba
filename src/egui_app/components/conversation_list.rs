//! Conversation List Entries
//!
//! Sidebar rows in the message center: the other participant's name and the
//! originating listing, if one is known.

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::theme::{colors, styles};
use crate::shared::messaging::Conversation;

/// Render one conversation row; returns true when clicked
pub fn render_entry(
    ui: &mut egui::Ui,
    other_name: &str,
    origin_title: Option<&str>,
    is_selected: bool,
) -> bool {
    let fill = if is_selected {
        colors::SIDEBAR_HOVER
    } else {
        colors::SIDEBAR_BG
    };

    let response = egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(styles::on_dark(other_name, colors::TEXT_LIGHT));
            if let Some(title) = origin_title {
                ui.label(styles::on_dark(format!("re: {}", title), colors::STATUS_OFFLINE));
            }
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}

/// Stable label when the other side of a conversation cannot be determined
pub fn fallback_name(conversation: &Conversation, current_user: Option<Uuid>) -> String {
    match current_user.and_then(|me| conversation.other_participant(me)) {
        Some(other) => other.to_string(),
        None => conversation.id.to_string(),
    }
}
