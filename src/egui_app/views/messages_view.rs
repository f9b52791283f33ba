//! Message Center
//!
//! Conversation list in the sidebar, chat area in the center. The open
//! thread is kept current by `AppState::tick` draining the push feed; this
//! view only renders what the thread holds and forwards user actions.

use eframe::egui;

use crate::dm::ThreadPhase;
use crate::egui_app::components::{conversation_list, input_bar, message_bubble};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::messaging::{Conversation, FeedStatus};

/// Render the message center
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    render_sidebar(ctx, state);
    render_chat_area(ctx, state);
}

fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("conversation_list")
        .frame(egui::Frame::new().fill(colors::SIDEBAR_BG))
        .exact_width(260.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_space(10.0);
                ui.label(styles::on_dark("Conversations", colors::TEXT_LIGHT));
            });
            ui.add_space(4.0);

            if state.is_loading_conversations {
                ui.horizontal(|ui| {
                    ui.add_space(10.0);
                    ui.label(styles::on_dark("Loading…", colors::STATUS_OFFLINE));
                });
                return;
            }
            if state.conversations.is_empty() {
                ui.horizontal(|ui| {
                    ui.add_space(10.0);
                    ui.label(styles::on_dark(
                        "No conversations yet",
                        colors::STATUS_OFFLINE,
                    ));
                });
                return;
            }

            let me = state.auth.current_user();
            let open_id = state.open_thread.as_ref().map(|t| t.conversation_id());
            let conversations: Vec<Conversation> = state.conversations.clone();

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    for conversation in &conversations {
                        if let Some(other) =
                            me.and_then(|me| conversation.other_participant(me))
                        {
                            state.ensure_profile(other);
                        }
                        let other_name = match me
                            .and_then(|me| conversation.other_participant(me))
                        {
                            Some(other) => state.profiles.display_name(other),
                            None => conversation_list::fallback_name(conversation, me),
                        };
                        let origin_title = conversation.origin_listing_id.and_then(|id| {
                            state
                                .listings
                                .iter()
                                .find(|l| l.id == id)
                                .map(|l| l.title.as_str())
                        });
                        let is_selected = open_id == Some(conversation.id);
                        if conversation_list::render_entry(
                            ui,
                            &other_name,
                            origin_title,
                            is_selected,
                        ) && !is_selected
                        {
                            state.open_conversation(conversation);
                        }
                    }
                });
        });
}

fn render_chat_area(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::MAIN_BG))
        .show(ctx, |ui| {
            match state.thread_phase() {
                ThreadPhase::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.label(styles::secondary("Opening conversation…"));
                    });
                    return;
                }
                ThreadPhase::Closed => {
                    ui.centered_and_justified(|ui| {
                        ui.label(styles::secondary(
                            "Pick a conversation, or message a seller from a listing",
                        ));
                    });
                    return;
                }
                ThreadPhase::Live => {}
            }

            let Some(thread) = &state.open_thread else {
                return;
            };

            let me = state.auth.current_user();
            let conversation_id = thread.conversation_id();
            let other = state
                .conversations
                .iter()
                .find(|c| c.id == conversation_id)
                .and_then(|c| me.and_then(|me| c.other_participant(me)));
            let header_name = other
                .map(|other| state.profiles.display_name(other))
                .unwrap_or_else(|| "Conversation".to_string());

            // Header with the live indicator
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(styles::card_title(header_name));
                let (dot_color, status_text) = match &state.feed_status {
                    Some(FeedStatus::Connected) => (colors::STATUS_LIVE, "live"),
                    Some(FeedStatus::Connecting) => (colors::STATUS_OFFLINE, "connecting"),
                    Some(FeedStatus::Error(_)) => (colors::ERROR, "connection lost"),
                    Some(FeedStatus::Disconnected) => (colors::STATUS_OFFLINE, "disconnected"),
                    None => (colors::STATUS_OFFLINE, ""),
                };
                if !status_text.is_empty() {
                    ui.colored_label(dot_color, "●");
                    ui.label(styles::secondary(status_text));
                }
            });
            ui.separator();

            if let Some(error) = &state.ui_error {
                ui.label(styles::error(error.clone()));
            }

            // Message history, pinned to the latest message
            let input_height = 48.0;
            let history_height = ui.available_height() - input_height;
            let messages = thread.messages().to_vec();
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .stick_to_bottom(true)
                .max_height(history_height)
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    if messages.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.label(styles::secondary("Say hello"));
                        });
                    }
                    for message in &messages {
                        let is_own = me == Some(message.sender_id);
                        message_bubble::render(ui, message, is_own);
                    }
                });

            if input_bar::render(ui, &mut state.message_input, state.is_sending_message) {
                state.send_message();
            }
        });
}
