use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{SyncCommand, SyncEvent};
use crate::config;

use super::components::{header, input_bar, message_list};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<SyncCommand>,
    event_receiver: mpsc::Receiver<SyncEvent>,
    config_path: String,
    repaint_interval: Duration,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<SyncCommand>,
        event_receiver: mpsc::Receiver<SyncEvent>,
        display_name: String,
        config_path: String,
        repaint_interval: Duration,
    ) -> Self {
        Self {
            state: AppState::new(display_name),
            command_sender,
            event_receiver,
            config_path,
            repaint_interval,
        }
    }

    fn handle_sync_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event);
        }
    }

    fn send_command(&mut self, command: SyncCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to sync worker: {err}");
        }
    }

    fn send_message(&mut self, username: String, content: String) {
        if let Some(name) = self.state.unsaved_username() {
            config::persist_display_name(&self.config_path, &name);
        }
        self.send_command(SyncCommand::SendMessage { username, content });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_sync_events();

        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            if header::render(ui, &mut self.state) {
                self.send_command(SyncCommand::ClearMessages);
            }
        });

        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some((username, content)) = input_bar::render(ui, &mut self.state) {
                self.send_message(username, content);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            message_list::render(ui, &self.state.messages);
        });

        // Events arrive from another task, so keep waking up to drain them.
        ctx.request_repaint_after(self.repaint_interval);
    }
}
