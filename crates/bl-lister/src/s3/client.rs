//! S3 client configuration and creation.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use bl_error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credentials::CredentialStrategy;

/// Configuration for S3 access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    /// How credentials are resolved
    pub credentials: CredentialStrategy,

    /// AWS region, overriding whatever the credential strategy implies
    pub region: Option<String>,

    /// Custom endpoint URL (for LocalStack or MinIO)
    pub endpoint: Option<String>,
}

impl S3Config {
    /// Create a new S3Config using the given credential strategy.
    pub fn new(credentials: CredentialStrategy) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint (for LocalStack).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Create an S3 client from configuration.
///
/// Only the credential strategy varies between clients; the requests sent
/// through the returned client are the same whichever strategy is used.
pub async fn create_s3_client(config: &S3Config) -> Result<Client> {
    use aws_config::Region;

    config.credentials.validate()?;

    debug!(
        strategy = config.credentials.kind(),
        region = ?config.region,
        endpoint = ?config.endpoint,
        "Configuring S3 client"
    );

    let mut aws_config_loader = config
        .credentials
        .apply(aws_config::defaults(BehaviorVersion::latest()));

    // An explicit region wins over the one carried by static credentials
    if let Some(region) = &config.region {
        aws_config_loader = aws_config_loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint {
        aws_config_loader = aws_config_loader.endpoint_url(endpoint);
    }

    let aws_config = aws_config_loader.load().await;

    let s3_config_builder = aws_sdk_s3::config::Builder::from(&aws_config);

    // Path-style access for LocalStack/MinIO compatibility
    let s3_config = if config.endpoint.is_some() {
        s3_config_builder.force_path_style(true).build()
    } else {
        s3_config_builder.build()
    };

    Ok(Client::from_conf(s3_config))
}
