//! Views
//!
//! One render function per screen, dispatched from the main panel. The top
//! bar owns navigation; switching away from the message center releases the
//! open thread's subscription.

use eframe::egui;

use crate::egui_app::state::{AppState, AppView};
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod browse_view;
pub mod detail_view;
pub mod favorites_view;
pub mod messages_view;
pub mod post_view;

/// Render the navigation bar
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .frame(
            egui::Frame::new()
                .fill(colors::TOP_BAR_BG)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("QuadMarket")
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                );
                ui.add_space(16.0);

                if state.auth.session.is_some() {
                    nav_button(ui, state, AppView::Browse, "Browse");
                    nav_button(ui, state, AppView::Favorites, "Favorites");
                    nav_button(ui, state, AppView::Post, "Sell");
                    nav_button(ui, state, AppView::Messages, "Messages");

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Sign out").clicked() {
                            state.sign_out();
                        }
                        if let Some(session) = &state.auth.session {
                            ui.label(styles::on_dark(
                                session.display_name.clone(),
                                colors::TEXT_LIGHT,
                            ));
                        }
                    });
                }
            });
        });
}

fn nav_button(ui: &mut egui::Ui, state: &mut AppState, view: AppView, label: &str) {
    let selected = state.view == view;
    if ui.selectable_label(selected, label).clicked() && !selected {
        if state.view == AppView::Messages {
            state.close_thread();
        }
        state.view = view;
        match view {
            AppView::Browse | AppView::Favorites => state.load_listings(),
            AppView::Messages => state.load_conversations(),
            AppView::Post => {}
        }
    }
}

/// Render the active screen
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.auth.session.is_none() {
        auth_view::render(ctx, state);
        return;
    }

    match state.view {
        AppView::Browse => {
            if state.selected_listing().is_some() {
                detail_view::render(ctx, state);
            } else {
                browse_view::render(ctx, state);
            }
        }
        AppView::Favorites => favorites_view::render(ctx, state),
        AppView::Post => post_view::render(ctx, state),
        AppView::Messages => messages_view::render(ctx, state),
    }
}
