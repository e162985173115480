//! S3 client and the ListBuckets call.
//!
//! This module provides:
//! - Client configuration with LocalStack support
//! - The [`BucketSource`] seam and its S3-backed implementation

mod client;
mod source;

pub use client::{S3Config, create_s3_client};
pub use source::{BucketSource, S3BucketSource};
