pub mod client;
pub mod error;
pub mod sync;

use async_trait::async_trait;

use crate::common::{ChatMessage, CreateMessageRequest, HealthResponse};

pub use client::ApiClient;
pub use error::TransportError;
pub use sync::SyncWorker;

/// Operations the client needs from the chat service.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, TransportError>;

    async fn list_messages(&self) -> Result<Vec<ChatMessage>, TransportError>;

    async fn send_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<ChatMessage, TransportError>;

    async fn clear_messages(&self) -> Result<(), TransportError>;
}
