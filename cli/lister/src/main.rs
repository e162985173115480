//! bucket-lister CLI
//!
//! Lists the S3 buckets visible to the configured credentials.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout only carries the response)
    run::init_logging(args.log_level)?;

    let stats = run::execute(args).await?;

    if let Some(duration) = stats.duration() {
        tracing::info!(
            buckets = stats.buckets_listed,
            truncated = stats.truncated,
            duration_ms = duration.num_milliseconds(),
            "Listing completed"
        );
    }

    Ok(())
}
