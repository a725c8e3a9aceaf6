use crate::common::{ChatMessage, SyncEvent};

/// Where the client stands with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Nothing pulled yet.
    Idle,
    Syncing,
    Online,
    Offline,
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    /// Last snapshot pulled from the server, replaced wholesale on each pull.
    pub messages: Vec<ChatMessage>,
    pub username: String,
    pub input_text: String,
    pub phase: SyncPhase,
    /// Result of the last settled pull; survives the `Syncing` phase so the
    /// indicator does not flicker on every tick.
    pub online: bool,
    pub error: Option<String>,
    /// A send, or the pull that follows it, is in flight.
    pub loading: bool,
    pub confirm_clear: bool,
    /// Display name last written to the config file.
    saved_username: String,
}

impl AppState {
    pub fn new(username: String) -> Self {
        Self {
            messages: Vec::new(),
            username: username.clone(),
            input_text: String::new(),
            phase: SyncPhase::Idle,
            online: true,
            error: None,
            loading: false,
            confirm_clear: false,
            saved_username: username.clone(),
        }
    }

    pub fn apply(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::PullStarted => self.phase = SyncPhase::Syncing,
            SyncEvent::Snapshot(messages) => {
                self.messages = messages;
                self.phase = SyncPhase::Online;
                self.online = true;
                self.error = None;
                self.loading = false;
            }
            SyncEvent::PullFailed(_) => {
                self.phase = SyncPhase::Offline;
                self.online = false;
                self.loading = false;
            }
            SyncEvent::SendStarted => {
                self.loading = true;
                self.error = None;
            }
            // Input stays locked until the follow-up pull settles.
            SyncEvent::SendCompleted(_) => {}
            SyncEvent::SendFailed(reason) => {
                self.loading = false;
                self.error = Some(reason);
            }
            SyncEvent::Cleared => self.messages.clear(),
            SyncEvent::ClearFailed(reason) => self.error = Some(reason),
        }
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.username.trim().is_empty() && !self.input_text.trim().is_empty()
    }

    /// Hand out the draft as `(username, content)` and reset the input box.
    pub fn take_draft(&mut self) -> Option<(String, String)> {
        if !self.can_send() {
            return None;
        }
        let content = std::mem::take(&mut self.input_text);
        Some((self.username.clone(), content))
    }

    /// The display name to write back to the config, if it changed since
    /// the last save.
    pub fn unsaved_username(&mut self) -> Option<String> {
        if self.username == self.saved_username {
            return None;
        }
        self.saved_username = self.username.clone();
        Some(self.username.clone())
    }
}
