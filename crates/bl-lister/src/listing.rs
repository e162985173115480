//! Serializable view of a ListBuckets response.
//!
//! Used for the JSON output formats only. Bucket order is kept exactly as the
//! service returned it.

use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::operation::{RequestId, RequestIdExt};
use aws_sdk_s3::types::Bucket;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single bucket as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketEntry {
    /// Bucket name
    pub name: Option<String>,

    /// When the bucket was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// Region the bucket lives in, when the service reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_region: Option<String>,
}

impl From<&Bucket> for BucketEntry {
    fn from(bucket: &Bucket) -> Self {
        Self {
            name: bucket.name().map(str::to_string),
            creation_date: bucket
                .creation_date()
                .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
            bucket_region: bucket.bucket_region().map(str::to_string),
        }
    }
}

/// Owner of the listed buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The whole response: buckets plus response metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketListing {
    /// Buckets in service order
    pub buckets: Vec<BucketEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerEntry>,

    /// Present when the service has more buckets; never followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_request_id: Option<String>,
}

impl From<&ListBucketsOutput> for BucketListing {
    fn from(output: &ListBucketsOutput) -> Self {
        Self {
            buckets: output.buckets().iter().map(BucketEntry::from).collect(),
            owner: output.owner().map(|owner| OwnerEntry {
                id: owner.id().map(str::to_string),
                display_name: owner.display_name().map(str::to_string),
            }),
            continuation_token: output.continuation_token().map(str::to_string),
            prefix: output.prefix().map(str::to_string),
            request_id: output.request_id().map(str::to_string),
            extended_request_id: output.extended_request_id().map(str::to_string),
        }
    }
}

impl BucketListing {
    /// Bucket names in service order, skipping entries without a name.
    pub fn names(&self) -> Vec<&str> {
        self.buckets
            .iter()
            .filter_map(|b| b.name.as_deref())
            .collect()
    }
}
