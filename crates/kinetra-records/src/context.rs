use kinetra_auth::client::CognitoConfig;

/// Shared handles for the flow functions: AWS clients plus the bucket and
/// user-pool configuration. Built once by the embedding application.
pub struct Context {
    pub s3: aws_sdk_s3::Client,
    pub cognito: aws_sdk_cognitoidentityprovider::Client,
    pub bucket: String,
    pub auth: CognitoConfig,
}

impl Context {
    /// Build clients from the default AWS config and read
    /// `KINETRA_BUCKET` / `KINETRA_USER_POOL_ID` / `KINETRA_CLIENT_ID`.
    pub async fn from_env() -> Self {
        Self {
            s3: kinetra_storage::client::build_client().await,
            cognito: kinetra_auth::client::build_client().await,
            bucket: kinetra_storage::client::bucket_from_env(),
            auth: CognitoConfig::from_env(),
        }
    }
}
