//! Patient account provisioning.

use aws_sdk_cognitoidentityprovider::types::{AttributeType, MessageActionType};
use aws_sdk_cognitoidentityprovider::Client;
use tracing::info;

use crate::error::AuthError;

/// Create a patient account with a temporary credential.
///
/// The credential is the 4-character fragment derived from the patient's
/// RUT. It is set as a Cognito *temporary* password with the welcome email
/// suppressed, so the pool forces a rotation on first sign-in — the
/// fragment never becomes a long-term credential.
///
/// Returns the opaque account id (the `sub` attribute). Conflict and
/// weak-credential signals map to [`AuthError::EmailInUse`] and
/// [`AuthError::WeakCredential`] and are propagated to the caller
/// unchanged — no retry happens here.
pub async fn provision_patient_account(
    client: &Client,
    user_pool_id: &str,
    email: &str,
    temporary_credential: &str,
) -> Result<String, AuthError> {
    info!(email = email, "provisioning patient account");

    let email_attr = AttributeType::builder()
        .name("email")
        .value(email)
        .build()
        .map_err(|e| AuthError::Cognito(e.to_string()))?;
    let verified_attr = AttributeType::builder()
        .name("email_verified")
        .value("true")
        .build()
        .map_err(|e| AuthError::Cognito(e.to_string()))?;

    let resp = client
        .admin_create_user()
        .user_pool_id(user_pool_id)
        .username(email)
        .temporary_password(temporary_credential)
        .message_action(MessageActionType::Suppress)
        .user_attributes(email_attr)
        .user_attributes(verified_attr)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_username_exists_exception() {
                AuthError::EmailInUse(email.to_string())
            } else if err.is_invalid_password_exception() {
                AuthError::WeakCredential(err.to_string())
            } else {
                AuthError::Cognito(err.to_string())
            }
        })?;

    let user = resp
        .user()
        .ok_or_else(|| AuthError::Cognito("AdminCreateUser returned no user".to_string()))?;

    // Prefer the immutable sub; fall back to the username
    let uid = user
        .attributes()
        .iter()
        .find(|a| a.name() == "sub")
        .and_then(|a| a.value())
        .or(user.username())
        .ok_or_else(|| AuthError::Cognito("new user has neither sub nor username".to_string()))?;

    Ok(uid.to_string())
}

/// Deactivate an account without deleting its records.
pub async fn disable_account(
    client: &Client,
    user_pool_id: &str,
    username: &str,
) -> Result<(), AuthError> {
    info!(username = username, "disabling account");

    client
        .admin_disable_user()
        .user_pool_id(user_pool_id)
        .username(username)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_user_not_found_exception() {
                AuthError::UserNotFound(username.to_string())
            } else {
                AuthError::Cognito(err.to_string())
            }
        })?;

    Ok(())
}
