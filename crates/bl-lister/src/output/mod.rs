//! Output implementations for ListBuckets responses.
//!
//! This module provides the [`Output`] trait and [`StdoutOutput`], which
//! renders the response as a debug dump, pretty JSON, or a single JSON line.

mod stdout;

pub use stdout::{OutputFormat, StdoutOutput, render};

use async_trait::async_trait;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use bl_error::Result;

/// Trait for emitting a ListBuckets response.
#[async_trait]
pub trait Output: Send + Sync {
    /// Emit the whole response once.
    async fn output(&self, response: &ListBucketsOutput) -> Result<()>;

    /// Flush any buffered output.
    async fn flush(&self) -> Result<()>;
}
