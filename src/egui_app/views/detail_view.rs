//! Listing Detail View
//!
//! Full listing info plus the "Message seller" action, which resolves the
//! conversation for this buyer/seller pair and opens the message center.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Render the detail screen for the selected listing
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(listing) = state.selected_listing().cloned() else {
        return;
    };
    state.ensure_profile(listing.seller_id);
    let seller_name = state.profiles.display_name(listing.seller_id);
    let is_own = state.auth.current_user() == Some(listing.seller_id);
    let is_favorite = state.favorites.contains(listing.id);

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            if ui.button("← Back to listings").clicked() {
                state.selected_listing_id = None;
                return;
            }
            ui.add_space(12.0);

            egui::Frame::new()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(styles::heading(&listing.title));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(styles::price(listing.price_label()));
                            },
                        );
                    });
                    ui.label(styles::secondary(format!(
                        "{} · posted {} by {}",
                        listing.category.label(),
                        listing.created_at.format("%b %-d"),
                        seller_name,
                    )));
                    if listing.is_sold {
                        ui.label(styles::secondary("This item is sold"));
                    }
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    if listing.description.is_empty() {
                        ui.label(styles::secondary("No description"));
                    } else {
                        ui.label(
                            egui::RichText::new(&listing.description).color(colors::TEXT_DARK),
                        );
                    }
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        if !is_own {
                            let label = if state.is_opening_thread {
                                "Opening conversation…"
                            } else {
                                "Message seller"
                            };
                            if ui
                                .add_enabled(!state.is_opening_thread, egui::Button::new(label))
                                .clicked()
                            {
                                state.message_seller(listing.seller_id, Some(listing.id));
                            }
                        }
                        let star_label = if is_favorite {
                            "★ Favorited"
                        } else {
                            "☆ Favorite"
                        };
                        if ui.button(star_label).clicked() {
                            state.toggle_favorite(listing.id);
                        }
                    });

                    if let Some(error) = &state.ui_error {
                        ui.add_space(8.0);
                        ui.label(styles::error(error.clone()));
                    }
                });
        });
}
