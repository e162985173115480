//! LocalStack test context and utilities.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use bl_error::Result;
use bl_lister::{CredentialStrategy, Output, S3Config};
use std::sync::{Arc, Mutex};

/// LocalStack accepts any key pair.
const LOCALSTACK_KEY: &str = "test";

/// LocalStack test context providing an S3 client for fixtures.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                LOCALSTACK_KEY,
                LOCALSTACK_KEY,
                None,
                None,
                "localstack",
            ))
            .endpoint_url(&endpoint)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create an S3 bucket for testing, if it doesn't exist yet.
    pub async fn create_bucket(&self, name: &str) -> std::result::Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Bucket names as the service reports them, in service order.
    pub async fn bucket_names(&self) -> std::result::Result<Vec<String>, aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        Ok(buckets
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(String::from))
            .collect())
    }

    /// S3 configuration pointing the lister at this LocalStack instance.
    pub fn lister_config(&self) -> S3Config {
        S3Config::new(CredentialStrategy::static_keys(
            LOCALSTACK_KEY,
            LOCALSTACK_KEY,
            &self.region,
        ))
        .with_endpoint(&self.endpoint)
    }
}

/// Collecting output that stores responses for verification.
#[derive(Default, Clone)]
pub struct CollectingOutput {
    responses: Arc<Mutex<Vec<ListBucketsOutput>>>,
}

impl CollectingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> Vec<ListBucketsOutput> {
        self.responses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Output for CollectingOutput {
    async fn output(&self, response: &ListBucketsOutput) -> Result<()> {
        self.responses.lock().unwrap().push(response.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}
