//! Stdout output implementation.

use async_trait::async_trait;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use bl_error::{BlError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::Output;
use crate::listing::BucketListing;

/// Output format for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty `Debug` dump of the SDK response object (default)
    #[default]
    Debug,

    /// Pretty-printed JSON
    Json,

    /// JSON on a single line
    Jsonl,
}

/// Render a response in the given format.
///
/// Bucket order is never changed.
pub fn render(format: OutputFormat, response: &ListBucketsOutput) -> Result<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{response:#?}")),
        OutputFormat::Json => serde_json::to_string_pretty(&BucketListing::from(response))
            .map_err(|e| BlError::Output(format!("JSON serialization failed: {e}"))),
        OutputFormat::Jsonl => serde_json::to_string(&BucketListing::from(response))
            .map_err(|e| BlError::Output(format!("JSON serialization failed: {e}"))),
    }
}

/// Stdout output implementation.
pub struct StdoutOutput {
    format: OutputFormat,
}

impl StdoutOutput {
    /// Create a new StdoutOutput with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// The format this output renders with.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new(OutputFormat::Debug)
    }
}

#[async_trait]
impl Output for StdoutOutput {
    async fn output(&self, response: &ListBucketsOutput) -> Result<()> {
        let rendered = render(self.format, response)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")
            .map_err(|e| BlError::Output(format!("Failed to write to stdout: {e}")))?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| BlError::Output(format!("Failed to flush stdout: {e}")))?;
        Ok(())
    }
}
