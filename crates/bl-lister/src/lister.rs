//! The single listing operation: one request, one write.

use bl_error::Result;
use tracing::{debug, info};

use crate::output::Output;
use crate::s3::BucketSource;
use crate::stats::ListingStats;

/// Sends one ListBuckets request and hands the response to an [`Output`].
pub struct BucketLister<S: BucketSource, O: Output> {
    source: S,
    output: O,
}

impl<S: BucketSource, O: Output> BucketLister<S, O> {
    /// Create a new lister.
    pub fn new(source: S, output: O) -> Self {
        Self { source, output }
    }

    /// Run the listing.
    ///
    /// Errors from the source are returned untouched and nothing is written
    /// to the output. A continuation token in the response is not followed.
    pub async fn run(&self) -> Result<ListingStats> {
        let mut stats = ListingStats::new();

        info!("Sending ListBuckets request");
        stats.record_request();
        let response = self.source.list_buckets().await?;

        let truncated = response.continuation_token().is_some();
        if truncated {
            debug!(
                continuation_token = response.continuation_token(),
                "Response has more buckets; not paginating"
            );
        }
        stats.record_response(response.buckets().len(), truncated);

        self.output.output(&response).await?;
        self.output.flush().await?;

        stats.complete();
        info!(buckets = stats.buckets_listed, "ListBuckets completed");

        Ok(stats)
    }
}
