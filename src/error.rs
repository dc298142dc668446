use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Backend error: {0}")]
    Rpc(String),
}

impl Error {
    /// Message for a user-facing notification. An error envelope carries the
    /// server's own message; transport-level failures fall back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Rpc(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
