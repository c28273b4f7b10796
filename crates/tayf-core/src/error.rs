use thiserror::Error;

/// Top-level error type for the site.
#[derive(Debug, Error)]
pub enum TayfError {
    /// Outbound feed request failed (transport, status, or decoding).
    #[error("feed error: {0}")]
    Feed(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
