use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::common::ChatMessage;

/// In-memory chat log shared by every request handler.
///
/// Messages are kept in insertion order behind a reader/writer lock and
/// sorted by timestamp on every read, so `list` never depends on how the
/// vector was filled. Nothing survives a process restart.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new message with a fresh id and the current server time.
    ///
    /// The store trusts its inputs: callers reject blank `username` or
    /// `content` before getting here.
    pub fn append(&self, username: impl Into<String>, content: impl Into<String>) -> ChatMessage {
        let mut messages = self.write();

        // Stamps never run backwards, even if the wall clock does.
        let now = Utc::now();
        let timestamp = messages
            .last()
            .map_or(now, |last| last.timestamp.max(now));

        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            content: content.into(),
            timestamp,
        };
        messages.push(message.clone());
        message
    }

    /// Snapshot of every message, oldest first. Ties keep insertion order.
    pub fn list(&self) -> Vec<ChatMessage> {
        let mut snapshot = self.read().clone();
        snapshot.sort_by_key(|message| message.timestamp);
        snapshot
    }

    pub fn find(&self, id: &str) -> Option<ChatMessage> {
        self.read().iter().find(|message| message.id == id).cloned()
    }

    /// Drop every message, returning how many were removed.
    pub fn clear(&self) -> usize {
        let removed = std::mem::take(&mut *self.write());
        removed.len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ChatMessage>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ChatMessage>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }
}
