use eframe::egui;

use crate::ui::state::{AppState, SyncPhase};

/// Draw the title row. Returns `true` once the user confirms clearing the chat.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.horizontal(|ui| {
        ui.heading("Poll Chat");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear Chat").clicked() {
                state.confirm_clear = true;
            }

            // Hiển thị trạng thái kết nối
            if state.online {
                ui.colored_label(egui::Color32::GREEN, "● Online");
            } else {
                ui.colored_label(egui::Color32::RED, "● Offline");
            }
            if state.phase == SyncPhase::Syncing {
                ui.spinner();
            }
        });
    });

    if let Some(error) = &state.error {
        ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
    }

    confirm_clear(ui.ctx(), state)
}

fn confirm_clear(ctx: &egui::Context, state: &mut AppState) -> bool {
    if !state.confirm_clear {
        return false;
    }

    let mut confirmed = false;
    egui::Window::new("Clear chat")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to clear all messages?");
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.confirm_clear = false;
                }
                if ui.button("Clear").clicked() {
                    state.confirm_clear = false;
                    confirmed = true;
                }
            });
        });
    confirmed
}
