/// Lệnh UI gửi xuống worker đồng bộ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Post a message, then pull the list right away.
    SendMessage { username: String, content: String },
    /// Remove every message on the server.
    ClearMessages,
    /// Pull the list outside the regular poll interval.
    Refresh,
}
