//! Post View
//!
//! Form for posting a new listing. Validation happens locally; the store
//! assigns id and timestamp on insert.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::listing::Category;

/// Render the sell form
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            ui.label(styles::heading("Sell an item"));
            ui.add_space(12.0);

            egui::Frame::new()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(420.0);

                    ui.label(styles::secondary("Title"));
                    ui.add(
                        egui::TextEdit::singleline(&mut state.post_form.title)
                            .hint_text("What are you selling?")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(styles::secondary("Price"));
                            ui.add(
                                egui::TextEdit::singleline(&mut state.post_form.price_text)
                                    .hint_text("25.00")
                                    .desired_width(100.0),
                            );
                        });
                        ui.vertical(|ui| {
                            ui.label(styles::secondary("Category"));
                            egui::ComboBox::from_id_salt("post_category")
                                .selected_text(state.post_form.category.label())
                                .show_ui(ui, |ui| {
                                    for category in Category::ALL {
                                        ui.selectable_value(
                                            &mut state.post_form.category,
                                            category,
                                            category.label(),
                                        );
                                    }
                                });
                        });
                    });
                    ui.add_space(8.0);

                    ui.label(styles::secondary("Description"));
                    ui.add(
                        egui::TextEdit::multiline(&mut state.post_form.description)
                            .hint_text("Condition, pickup spot, anything useful")
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(12.0);

                    let label = if state.is_posting_listing {
                        "Posting…"
                    } else {
                        "Post listing"
                    };
                    if ui
                        .add_enabled(!state.is_posting_listing, egui::Button::new(label))
                        .clicked()
                    {
                        state.submit_post();
                    }

                    if let Some(error) = &state.post_form.error {
                        ui.add_space(8.0);
                        ui.label(styles::error(error.clone()));
                    }
                });
        });
}
