use thiserror::Error;

use kinetra_auth::error::AuthError;
use kinetra_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum RecordsError {
    /// A form field was rejected. The message is shown to the end user
    /// as-is, in the same request.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RecordsError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
