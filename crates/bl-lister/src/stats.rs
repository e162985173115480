//! Statistics for a listing run.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected during a listing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of ListBuckets requests sent
    pub requests_sent: usize,

    /// Number of buckets in the response
    pub buckets_listed: usize,

    /// Whether the response carried a continuation token that was not followed
    pub truncated: bool,
}

impl ListingStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a sent request.
    pub fn record_request(&mut self) {
        self.requests_sent += 1;
    }

    /// Record what a response contained.
    pub fn record_response(&mut self, buckets: usize, truncated: bool) {
        self.buckets_listed = buckets;
        self.truncated = truncated;
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
