//! Auth View
//!
//! Sign-in / sign-up forms shown while no session exists.

use eframe::egui;

use crate::egui_app::auth::AuthMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Render the auth screen
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(styles::heading("Welcome to QuadMarket"));
                let subtitle = match state.config.campus() {
                    Some(campus) => format!("Buy and sell at {}", campus),
                    None => "Buy and sell on campus".to_string(),
                };
                ui.label(styles::secondary(subtitle));
                ui.add_space(24.0);

                egui::Frame::new()
                    .fill(colors::CARD_BG)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(20))
                    .show(ui, |ui| {
                        ui.set_width(320.0);

                        ui.horizontal(|ui| {
                            if ui
                                .selectable_label(state.auth.mode == AuthMode::SignIn, "Sign in")
                                .clicked()
                            {
                                state.auth.mode = AuthMode::SignIn;
                                state.auth.clear_error();
                            }
                            if ui
                                .selectable_label(state.auth.mode == AuthMode::SignUp, "Sign up")
                                .clicked()
                            {
                                state.auth.mode = AuthMode::SignUp;
                                state.auth.clear_error();
                            }
                        });
                        ui.add_space(12.0);

                        ui.label(styles::secondary("Campus email"));
                        ui.add(
                            egui::TextEdit::singleline(&mut state.auth.email)
                                .hint_text("you@campus.edu")
                                .desired_width(f32::INFINITY),
                        );

                        if state.auth.mode == AuthMode::SignUp {
                            ui.add_space(8.0);
                            ui.label(styles::secondary("Display name"));
                            ui.add(
                                egui::TextEdit::singleline(&mut state.auth.display_name)
                                    .desired_width(f32::INFINITY),
                            );
                        }

                        ui.add_space(8.0);
                        ui.label(styles::secondary("Password"));
                        let password = ui.add(
                            egui::TextEdit::singleline(&mut state.auth.password)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(12.0);

                        let label = match (state.auth.loading, state.auth.mode) {
                            (true, _) => "Working…",
                            (false, AuthMode::SignIn) => "Sign in",
                            (false, AuthMode::SignUp) => "Create account",
                        };
                        let submit = ui.add_enabled(
                            !state.auth.loading,
                            egui::Button::new(label).min_size(egui::vec2(280.0, 28.0)),
                        );
                        let enter_pressed = password.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if (submit.clicked() || enter_pressed) && !state.auth.loading {
                            state.start_auth();
                        }

                        if let Some(error) = &state.auth.error {
                            ui.add_space(8.0);
                            ui.label(styles::error(error.clone()));
                        }
                    });
            });
        });
}
