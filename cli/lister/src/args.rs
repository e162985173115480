//! CLI argument definitions for bucket-lister.

use clap::{Parser, ValueEnum};

/// List the S3 buckets visible to the configured credentials.
///
/// Sends a single ListBuckets request and prints the full response to stdout.
/// The credential strategy is fixed when the binary is built; no flag changes it.
///
/// ## Examples
///
/// Default debug dump:
///   bucket-lister
///
/// JSON for piping into jq:
///   bucket-lister --output-format json | jq '.buckets[].name'
///
/// Against LocalStack:
///   bucket-lister --endpoint-url http://localhost:4566
#[derive(Parser, Debug)]
#[command(name = "bucket-lister")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for the response
    #[arg(long, value_enum, default_value = "debug")]
    pub output_format: OutputFormatArg,

    /// Custom S3 endpoint URL (for LocalStack or MinIO)
    #[arg(long, env = "BL_S3_ENDPOINT")]
    pub endpoint_url: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Pretty debug dump of the SDK response
    Debug,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Jsonl,
}

impl From<OutputFormatArg> for bl_lister::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Debug => bl_lister::OutputFormat::Debug,
            OutputFormatArg::Json => bl_lister::OutputFormat::Json,
            OutputFormatArg::Jsonl => bl_lister::OutputFormat::Jsonl,
        }
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
