//! Message Composer
//!
//! Text input plus send button at the bottom of the chat area. Reports
//! whether the user asked to send this frame (button or Enter).

use eframe::egui;

use crate::egui_app::theme::colors;

/// Render the composer; returns true when a send was requested
pub fn render(ui: &mut egui::Ui, input: &mut String, sending: bool) -> bool {
    let mut send_requested = false;

    egui::Frame::new()
        .fill(colors::INPUT_BAR_BG)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let button_label = if sending { "…" } else { "Send" };
                // Right-to-left so the button keeps its size and the text
                // field takes the rest
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = ui.add_enabled(!sending, egui::Button::new(button_label));
                    let edit = ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::singleline(input).hint_text("Write a message"),
                    );
                    let enter_pressed = edit.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (button.clicked() || enter_pressed) && !sending {
                        send_requested = true;
                        edit.request_focus();
                    }
                });
            });
        });

    send_requested
}
