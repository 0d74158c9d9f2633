use aws_sdk_cognitoidentityprovider::Client;

/// User pool configuration, resolved from the environment.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    pub user_pool_id: String,
    pub client_id: String,
}

impl CognitoConfig {
    /// Read `KINETRA_USER_POOL_ID` / `KINETRA_CLIENT_ID`, with placeholder
    /// defaults for local development.
    pub fn from_env() -> Self {
        Self {
            user_pool_id: std::env::var("KINETRA_USER_POOL_ID")
                .unwrap_or_else(|_| "us-east-1_placeholder".to_string()),
            client_id: std::env::var("KINETRA_CLIENT_ID").unwrap_or_else(|_| "local".to_string()),
        }
    }
}

/// Build a Cognito Identity Provider client from the default AWS config.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}

/// Build a Cognito Identity Provider client with a specific region.
pub async fn build_client_with_region(region: &str) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
