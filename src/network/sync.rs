use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::common::{CreateMessageRequest, SyncCommand, SyncEvent};

use super::ChatApi;

/// Background task that keeps the UI's message snapshot in step with the
/// server.
///
/// Pulls run on a fixed interval and right after every successful send. All
/// work happens inside one task, so pulls never overlap: a tick that falls
/// due while a request is in flight is skipped rather than queued.
pub struct SyncWorker<A> {
    api: A,
    event_sender: mpsc::Sender<SyncEvent>,
    command_receiver: mpsc::Receiver<SyncCommand>,
    poll_interval: Duration,
}

impl<A: ChatApi> SyncWorker<A> {
    pub fn new(
        api: A,
        event_sender: mpsc::Sender<SyncEvent>,
        command_receiver: mpsc::Receiver<SyncCommand>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            api,
            event_sender,
            command_receiver,
            poll_interval,
        }
    }

    /// Run until the command channel closes.
    pub async fn run(mut self) {
        match self.api.health().await {
            Ok(health) => log::info!("Chat service is {} at {}", health.status, health.timestamp),
            Err(err) => log::warn!("Health check failed: {err}"),
        }

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!("Sync worker started (poll every {:?})", self.poll_interval);

        loop {
            tokio::select! {
                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => break,
                    }
                }
                _ = ticker.tick() => {
                    self.pull().await;
                }
            }
        }

        log::info!("Sync worker stopped");
    }

    pub(crate) async fn handle_command(&mut self, command: SyncCommand) {
        match command {
            SyncCommand::SendMessage { username, content } => {
                self.emit(SyncEvent::SendStarted).await;
                let request = CreateMessageRequest { username, content };
                match self.api.send_message(&request).await {
                    Ok(message) => {
                        self.emit(SyncEvent::SendCompleted(message)).await;
                        self.pull().await;
                    }
                    Err(err) => {
                        log::warn!("Failed to send message: {err}");
                        self.emit(SyncEvent::SendFailed(err.to_string())).await;
                    }
                }
            }
            SyncCommand::ClearMessages => match self.api.clear_messages().await {
                Ok(()) => self.emit(SyncEvent::Cleared).await,
                Err(err) => {
                    log::warn!("Failed to clear messages: {err}");
                    self.emit(SyncEvent::ClearFailed(err.to_string())).await;
                }
            },
            SyncCommand::Refresh => self.pull().await,
        }
    }

    /// Fetch the full list once and report the outcome.
    pub(crate) async fn pull(&mut self) {
        self.emit(SyncEvent::PullStarted).await;
        match self.api.list_messages().await {
            Ok(messages) => self.emit(SyncEvent::Snapshot(messages)).await,
            Err(err) => {
                log::warn!("Failed to load messages: {err}");
                self.emit(SyncEvent::PullFailed(err.to_string())).await;
            }
        }
    }

    async fn emit(&self, event: SyncEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::debug!("UI is gone, dropping sync event: {err}");
        }
    }
}
