//! The ListBuckets call, behind a trait so it can be swapped out in tests.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::list_buckets::builders::ListBucketsFluentBuilder;
use bl_error::{BlError, Result};

/// Something that can answer a single ListBuckets request.
#[async_trait]
pub trait BucketSource: Send + Sync {
    /// Send one ListBuckets request with no parameters.
    ///
    /// Implementations must not follow continuation tokens.
    async fn list_buckets(&self) -> Result<ListBucketsOutput>;
}

/// [`BucketSource`] backed by a real S3 client.
#[derive(Debug, Clone)]
pub struct S3BucketSource {
    client: Client,
}

impl S3BucketSource {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The request [`list_buckets`](BucketSource::list_buckets) sends, before sending it.
    pub fn request(&self) -> ListBucketsFluentBuilder {
        self.client.list_buckets()
    }
}

#[async_trait]
impl BucketSource for S3BucketSource {
    async fn list_buckets(&self) -> Result<ListBucketsOutput> {
        self.request()
            .send()
            .await
            .map_err(|e| BlError::ListBuckets(DisplayErrorContext(&e).to_string()))
    }
}
