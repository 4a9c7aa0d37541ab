use aws_config::SdkConfig;
use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    /// Kept alongside the S3 client because Bedrock builds its own client
    /// per invocation from the same config.
    pub sdk_config: SdkConfig,
    pub bucket: String,
    pub model_id: String,
}
