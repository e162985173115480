//! bl-lister - list the S3 buckets visible to a set of credentials.
//!
//! One ListBuckets request, one write of the response. The crate provides:
//!
//! - [`CredentialStrategy`]: static keys, ambient discovery, or a named profile
//! - [`create_s3_client`]: client construction with LocalStack support
//! - [`BucketSource`]: the request seam, with [`S3BucketSource`] for real S3
//! - [`BucketLister`]: the operation itself
//! - [`StdoutOutput`]: debug dump, JSON, or JSON Lines on stdout
//!
//! # Example
//!
//! ```ignore
//! use bl_lister::{BucketLister, CredentialStrategy, S3BucketSource, S3Config, StdoutOutput};
//! use bl_lister::create_s3_client;
//!
//! let config = S3Config::new(CredentialStrategy::named_profile("bucket-lister"));
//! let client = create_s3_client(&config).await?;
//!
//! let lister = BucketLister::new(S3BucketSource::new(client), StdoutOutput::default());
//! let stats = lister.run().await?;
//! eprintln!("Listed {} buckets", stats.buckets_listed);
//! ```

pub mod credentials;
pub mod lister;
pub mod listing;
pub mod output;
pub mod s3;
pub mod stats;

pub use credentials::{CredentialStrategy, DEFAULT_PROFILE};
pub use lister::BucketLister;
pub use listing::{BucketEntry, BucketListing, OwnerEntry};
pub use output::{Output, OutputFormat, StdoutOutput, render};
pub use s3::{BucketSource, S3BucketSource, S3Config, create_s3_client};
pub use stats::ListingStats;
