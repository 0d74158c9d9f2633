use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered: {0}")]
    EmailInUse(String),

    #[error("credential rejected by the identity provider: {0}")]
    WeakCredential(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("new password required — complete the rotation challenge")]
    NewPasswordRequired { session: String },

    #[error("password rotation failed: {0}")]
    RotationFailed(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("Cognito error: {0}")]
    Cognito(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
