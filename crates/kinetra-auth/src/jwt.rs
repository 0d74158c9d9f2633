use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims extracted from a Cognito JWT issued for a Kinetra user.
#[derive(Debug, Deserialize)]
pub struct KinetraClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    /// Role tag mirrored into the pool at provisioning time. The account
    /// document in the store remains the source of truth.
    #[serde(default, rename = "custom:role")]
    pub role: Option<String>,
}

/// Validate a Cognito JWT token.
///
/// In production, you would fetch the JWKS from the Cognito user pool
/// and use the matching key. This function takes a pre-fetched public key.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    user_pool_id: &str,
    region: &str,
) -> Result<KinetraClaims, AuthError> {
    let issuer = format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[&issuer]);
    validation.validate_exp = true;

    let token_data = decode::<KinetraClaims>(token, decoding_key, &validation)?;

    let token_use = &token_data.claims.token_use;
    if token_use != "access" && token_use != "id" {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}
