use super::types::ChatMessage;

/// Sự kiện từ worker đồng bộ gửi lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    PullStarted,
    /// Full ordered list from the server; replaces the local snapshot.
    Snapshot(Vec<ChatMessage>),
    PullFailed(String),
    SendStarted,
    SendCompleted(ChatMessage),
    SendFailed(String),
    Cleared,
    ClearFailed(String),
}
