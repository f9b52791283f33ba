//! Favorites View
//!
//! The signed-in user's bookmarked listings, filtered client-side from the
//! fetched collection.

use eframe::egui;

use crate::egui_app::components::listing_card::{self, CardAction};
use crate::egui_app::state::{AppState, AppView};
use crate::egui_app::theme::{colors, styles};
use crate::shared::listing::Listing;

/// Render the favorites screen
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            ui.label(styles::heading("Favorites"));
            ui.add_space(8.0);

            let favorites: Vec<Listing> = state
                .favorites
                .favorite_listings(&state.listings)
                .into_iter()
                .cloned()
                .collect();
            for listing in &favorites {
                state.ensure_profile(listing.seller_id);
            }

            if favorites.is_empty() {
                ui.label(styles::secondary(
                    "Nothing saved yet. Star a listing while browsing.",
                ));
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    for listing in &favorites {
                        let seller_name = state.profiles.display_name(listing.seller_id);
                        match listing_card::render(ui, listing, &seller_name, true) {
                            CardAction::Open => {
                                state.selected_listing_id = Some(listing.id);
                                state.view = AppView::Browse;
                            }
                            CardAction::ToggleFavorite => state.toggle_favorite(listing.id),
                            CardAction::None => {}
                        }
                    }
                });
        });
}
