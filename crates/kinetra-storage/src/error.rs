use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document not found: {key}")]
    NotFound { key: String },

    #[error("precondition failed for {key}: document changed since read")]
    PreconditionFailed { key: String },

    #[error("get failed: {0}")]
    Get(String),

    #[error("put failed: {0}")]
    Put(String),

    #[error("delete failed: {0}")]
    Delete(String),

    #[error("list failed: {0}")]
    List(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
