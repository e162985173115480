//! Main execution logic for the bucket-lister CLI.

use anyhow::Result;
use bl_lister::{
    BucketLister, CredentialStrategy, DEFAULT_PROFILE, ListingStats, S3BucketSource, S3Config,
    StdoutOutput, create_s3_client,
};
use tracing::{Level, debug};
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Credential strategy compiled into this binary.
///
/// Replace the body with `CredentialStrategy::ambient()` or
/// `CredentialStrategy::static_keys(..)` and rebuild to switch strategies.
pub fn credential_strategy() -> CredentialStrategy {
    CredentialStrategy::named_profile(DEFAULT_PROFILE)
}

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr) // stdout is reserved for the response
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}

/// Build the S3 configuration for this run.
pub fn build_config(args: &Cli, credentials: CredentialStrategy) -> S3Config {
    let mut config = S3Config::new(credentials);

    if let Some(endpoint) = &args.endpoint_url {
        config = config.with_endpoint(endpoint);
    }

    config
}

/// Execute the listing with the provided arguments.
pub async fn execute(args: Cli) -> Result<ListingStats> {
    let strategy = credential_strategy();
    debug!(?strategy, "Using compiled-in credential strategy");

    let config = build_config(&args, strategy);
    let client = create_s3_client(&config).await?;

    let lister = BucketLister::new(
        S3BucketSource::new(client),
        StdoutOutput::new(args.output_format.into()),
    );

    Ok(lister.run().await?)
}
