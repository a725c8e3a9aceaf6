use chrono::Local;
use eframe::egui;

use crate::common::ChatMessage;

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.label(egui::RichText::new("No messages yet. Start the conversation!").weak());
                return;
            }

            for message in messages {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&message.username).strong());
                    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
                    ui.label(egui::RichText::new(time.to_string()).weak());
                });
                ui.label(&message.content);
                ui.add_space(4.0);
            }
        });
}
