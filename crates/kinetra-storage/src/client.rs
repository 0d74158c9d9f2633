use aws_sdk_s3::Client;

/// Name of the env var holding the record bucket. Defaults to `kinetra`.
pub const BUCKET_ENV: &str = "KINETRA_BUCKET";

/// Resolve the record bucket name from the environment.
pub fn bucket_from_env() -> String {
    std::env::var(BUCKET_ENV).unwrap_or_else(|_| "kinetra".to_string())
}

/// Build an S3 client from the default AWS config.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}

/// Build an S3 client with a specific region.
pub async fn build_client_with_region(region: &str) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
