use aws_config::SdkConfig;
use aws_sdk_s3::Client;

/// Load the default AWS config (environment, profile, instance metadata).
///
/// Loaded once at startup and shared; the Bedrock client is built from the
/// same config.
pub async fn load_config() -> SdkConfig {
    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await
}

/// Build an S3 client from an already-loaded config.
pub fn build_client(config: &SdkConfig) -> Client {
    Client::new(config)
}
