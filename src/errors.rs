use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Application error produced by a delegate operation; carried as a
    /// value and fully recoverable by the caller.
    #[error("{0}")]
    Operation(String),
    #[error("{0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
