use reqwest::StatusCode;
use tokio::sync::mpsc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid user: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Couldn't decode events: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Couldn't send to the {0} queue: it has no receivers left")]
    SendError(&'static str),

    #[error("Worker task join error: {0}")]
    WorkerJoinError(#[from] tokio::task::JoinError),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was reported by the event source, before any
    /// event reached the pipeline.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::NotFound(_) | Error::UnexpectedStatus(_) | Error::Decode(_)
        )
    }
}

impl<T> From<flume::SendError<T>> for Error {
    fn from(_: flume::SendError<T>) -> Self {
        Error::SendError("work")
    }
}

impl<T> From<mpsc::error::SendError<T>> for Error {
    fn from(_: mpsc::error::SendError<T>) -> Self {
        Error::SendError("result")
    }
}
