//! Browse View
//!
//! Search bar over the fetched listings collection plus the result grid.
//! Filtering is the explicit client-side post-filter in `market::listings`.

use eframe::egui;

use crate::egui_app::components::listing_card::{self, CardAction};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::market::search_listings;
use crate::shared::listing::{Category, Listing};

/// Render the browse screen
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            render_search_bar(ui, state);
            ui.add_space(8.0);

            if let Some(error) = state.ui_error.clone() {
                ui.label(styles::error(error));
                ui.add_space(4.0);
            }

            if state.is_loading_listings {
                ui.label(styles::secondary("Loading listings…"));
                return;
            }

            let visible: Vec<Listing> = search_listings(&state.listings, &state.query)
                .into_iter()
                .cloned()
                .collect();
            for listing in &visible {
                state.ensure_profile(listing.seller_id);
            }

            if visible.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(styles::secondary("No listings match"));
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    for listing in &visible {
                        let seller_name = state.profiles.display_name(listing.seller_id);
                        let is_favorite = state.favorites.contains(listing.id);
                        match listing_card::render(ui, listing, &seller_name, is_favorite) {
                            CardAction::Open => state.selected_listing_id = Some(listing.id),
                            CardAction::ToggleFavorite => state.toggle_favorite(listing.id),
                            CardAction::None => {}
                        }
                    }
                });
        });
}

fn render_search_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.query.text)
                .hint_text("Search listings")
                .desired_width(220.0),
        );

        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(
                state
                    .query
                    .category
                    .map(|c| c.label())
                    .unwrap_or("All categories"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.query.category, None, "All categories");
                for category in Category::ALL {
                    ui.selectable_value(
                        &mut state.query.category,
                        Some(category),
                        category.label(),
                    );
                }
            });

        ui.checkbox(&mut state.query.include_sold, "Show sold");

        if ui.button("Refresh").clicked() {
            state.load_listings();
        }
    });
}
