//! HTTP surface of the chat service.
//!
//! Routes are assembled with [`router`]; [`serve`] runs them on a bound
//! listener until the shutdown future resolves.

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::storage::MessageStore;

pub use error::ApiError;

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/api/health";
/// Message collection path.
pub const MESSAGES_PATH: &str = "/api/messages";
/// Single message path, the target of the `Location` header on create.
pub const MESSAGE_PATH: &str = "/api/messages/:id";

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct ServerState {
    pub store: Arc<MessageStore>,
}

impl ServerState {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }
}

pub fn health_routes() -> Router<ServerState> {
    Router::new().route(HEALTH_PATH, get(handlers::health))
}

pub fn message_routes() -> Router<ServerState> {
    Router::new()
        .route(
            MESSAGES_PATH,
            get(handlers::list_messages)
                .post(handlers::create_message)
                .delete(handlers::clear_messages),
        )
        .route(MESSAGE_PATH, get(handlers::get_message))
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(message_routes())
        .with_state(state)
}

pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("Chat API listening on http://{addr}");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
