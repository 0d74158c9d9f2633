use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::types::{AuthFlowType, ChallengeNameType};
use aws_sdk_cognitoidentityprovider::Client;
use tracing::info;

use crate::error::AuthError;

/// Result of a sign-in attempt.
pub enum AuthOutcome {
    /// Authentication succeeded, tokens returned.
    Success {
        access_token: String,
        id_token: String,
        refresh_token: String,
    },
    /// First sign-in with a provisioned temporary credential — the caller
    /// must complete the rotation with [`respond_to_new_password`].
    NewPasswordRequired { session: String },
}

/// Initiate email/password authentication with Cognito.
pub async fn initiate_auth(
    client: &Client,
    client_id: &str,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, AuthError> {
    info!(email = email, "initiating auth");

    let mut auth_params = HashMap::new();
    auth_params.insert("USERNAME".to_string(), email.to_string());
    auth_params.insert("PASSWORD".to_string(), password.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(AuthOutcome::Success {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            refresh_token: result.refresh_token().unwrap_or_default().to_string(),
        })
    } else if resp.challenge_name() == Some(&ChallengeNameType::NewPasswordRequired) {
        let session = resp.session().unwrap_or_default().to_string();
        Ok(AuthOutcome::NewPasswordRequired { session })
    } else {
        Err(AuthError::AuthFailed("unexpected response".to_string()))
    }
}

/// Complete the forced rotation of a temporary credential.
pub async fn respond_to_new_password(
    client: &Client,
    client_id: &str,
    email: &str,
    session: &str,
    new_password: &str,
) -> Result<AuthOutcome, AuthError> {
    info!(email = email, "completing password rotation");

    let mut challenge_responses = HashMap::new();
    challenge_responses.insert("USERNAME".to_string(), email.to_string());
    challenge_responses.insert("NEW_PASSWORD".to_string(), new_password.to_string());

    let resp = client
        .respond_to_auth_challenge()
        .client_id(client_id)
        .challenge_name(ChallengeNameType::NewPasswordRequired)
        .set_challenge_responses(Some(challenge_responses))
        .session(session)
        .send()
        .await
        .map_err(|e| AuthError::RotationFailed(e.into_service_error().to_string()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(AuthOutcome::Success {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            refresh_token: result.refresh_token().unwrap_or_default().to_string(),
        })
    } else {
        Err(AuthError::RotationFailed(
            "rotation did not return tokens".to_string(),
        ))
    }
}

/// Refresh tokens using a refresh token.
pub async fn refresh_auth(
    client: &Client,
    client_id: &str,
    refresh_token: &str,
) -> Result<AuthOutcome, AuthError> {
    let mut auth_params = HashMap::new();
    auth_params.insert("REFRESH_TOKEN".to_string(), refresh_token.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::RefreshTokenAuth)
        .client_id(client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(AuthOutcome::Success {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            // Refresh token may not be returned on refresh
            refresh_token: result
                .refresh_token()
                .unwrap_or(refresh_token)
                .to_string(),
        })
    } else {
        Err(AuthError::AuthFailed("refresh failed".to_string()))
    }
}
