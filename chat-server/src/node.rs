use std::error::Error;
use std::sync::Arc;

use poll_chat::server::{self, ServerState};
use poll_chat::storage::MessageStore;
use tokio::net::TcpListener;
use tokio::time::{Duration, interval};

const STATS_INTERVAL: Duration = Duration::from_secs(30);

/// Owns the message store for the lifetime of the process and serves it
/// over HTTP.
pub struct ChatNode {
    store: Arc<MessageStore>,
    listen_addr: String,
}

impl ChatNode {
    pub fn new(listen_addr: String) -> Self {
        Self {
            store: Arc::new(MessageStore::new()),
            listen_addr,
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error>> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        let state = ServerState::new(Arc::clone(&self.store));

        // Shutdown is driven by the caller dropping this future.
        let server = server::serve(listener, state, std::future::pending::<()>());
        tokio::pin!(server);

        let mut stats_interval = interval(STATS_INTERVAL);

        loop {
            tokio::select! {
                result = &mut server => {
                    result?;
                    return Ok(());
                }
                _ = stats_interval.tick() => {
                    log::info!("Statistics: {} stored messages", self.message_count());
                }
            }
        }
    }

    pub fn message_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_starts_empty() {
        let node = ChatNode::new("127.0.0.1:0".to_string());
        assert_eq!(node.message_count(), 0);

        node.store.append("alice", "hi");
        assert_eq!(node.message_count(), 1);
    }
}
