/// Anything that stops the client from getting a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("service unreachable: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}
