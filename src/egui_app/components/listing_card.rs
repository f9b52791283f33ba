//! Listing Card Component
//!
//! One card in the browse/favorites grid: title, price, category, seller,
//! and the favorite toggle.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::listing::Listing;

/// What the user did with the card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    Open,
    ToggleFavorite,
}

/// Render a listing card; returns the action the user took
pub fn render(
    ui: &mut egui::Ui,
    listing: &Listing,
    seller_name: &str,
    is_favorite: bool,
) -> CardAction {
    let mut action = CardAction::None;

    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let title = ui.add(
                        egui::Label::new(styles::card_title(&listing.title))
                            .sense(egui::Sense::click()),
                    );
                    if title.clicked() {
                        action = CardAction::Open;
                    }
                    ui.label(styles::secondary(format!(
                        "{} · {}",
                        listing.category.label(),
                        seller_name
                    )));
                    if listing.is_sold {
                        ui.label(styles::secondary("Sold"));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let star = if is_favorite { "★" } else { "☆" };
                    if ui
                        .button(egui::RichText::new(star).color(colors::ACCENT))
                        .clicked()
                    {
                        action = CardAction::ToggleFavorite;
                    }
                    ui.label(styles::price(listing.price_label()));
                });
            });
        });
    ui.add_space(6.0);

    action
}
