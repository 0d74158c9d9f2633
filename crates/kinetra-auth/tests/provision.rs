//! Integration tests for account provisioning.
//!
//! These tests call real AWS APIs and require valid credentials plus a
//! test user pool in `KINETRA_USER_POOL_ID` / `KINETRA_CLIENT_ID`.
//!
//! Run with: `cargo test -p kinetra-auth --test provision -- --ignored`

use kinetra_auth::client::{build_client, CognitoConfig};
use kinetra_auth::error::AuthError;
use kinetra_auth::flows::{initiate_auth, AuthOutcome};
use kinetra_auth::provision::{disable_account, provision_patient_account};

#[tokio::test]
#[ignore]
async fn provisioned_account_requires_rotation_on_first_sign_in() {
    let client = build_client().await;
    let config = CognitoConfig::from_env();

    let email = format!("kinetra-test+{}@example.com", unique_tag());
    let fragment = "5678";

    let uid = provision_patient_account(&client, &config.user_pool_id, &email, fragment)
        .await
        .expect("provisioning should succeed");
    assert!(!uid.is_empty());

    let outcome = initiate_auth(&client, &config.client_id, &email, fragment)
        .await
        .expect("first sign-in should reach the rotation challenge");
    assert!(matches!(outcome, AuthOutcome::NewPasswordRequired { .. }));

    disable_account(&client, &config.user_pool_id, &email)
        .await
        .expect("cleanup should succeed");
}

#[tokio::test]
#[ignore]
async fn duplicate_email_surfaces_conflict() {
    let client = build_client().await;
    let config = CognitoConfig::from_env();

    let email = format!("kinetra-test+{}@example.com", unique_tag());

    provision_patient_account(&client, &config.user_pool_id, &email, "5678")
        .await
        .expect("first provisioning should succeed");

    let second = provision_patient_account(&client, &config.user_pool_id, &email, "1234").await;
    assert!(matches!(second, Err(AuthError::EmailInUse(_))));

    disable_account(&client, &config.user_pool_id, &email)
        .await
        .expect("cleanup should succeed");
}

fn unique_tag() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("{nanos:x}")
}
