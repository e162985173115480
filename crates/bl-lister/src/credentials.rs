//! Credential resolution strategies.
//!
//! The SDK does the actual resolution. A [`CredentialStrategy`] only decides
//! which inputs the config loader is given before `load()` is called.

use aws_config::{ConfigLoader, Region};
use aws_sdk_s3::config::Credentials;
use bl_error::{BlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile looked up by [`CredentialStrategy::NamedProfile`] when no other name is given.
///
/// Add it to `~/.aws/credentials`:
///
/// ```text
/// [bucket-lister]
/// aws_access_key_id = YOUR_ACCESS_KEY
/// aws_secret_access_key = YOUR_SECRET_KEY
/// region = ap-south-1
/// ```
pub const DEFAULT_PROFILE: &str = "bucket-lister";

/// Provider name attached to statically supplied credentials.
const STATIC_PROVIDER_NAME: &str = "bucket-lister-static";

/// How the S3 client obtains its credentials.
///
/// Exactly one strategy applies per client. Switching strategies changes how
/// credentials are resolved and nothing else.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CredentialStrategy {
    /// An access key pair embedded in the program. Not for production use.
    StaticKeys {
        access_key_id: String,
        secret_access_key: String,
        region: String,
    },

    /// The SDK default chain: environment, `~/.aws/credentials`,
    /// `~/.aws/config`, then container and instance metadata.
    AmbientDiscovery,

    /// A named section of the shared credentials and config files.
    NamedProfile { name: String },
}

impl Default for CredentialStrategy {
    fn default() -> Self {
        Self::named_profile(DEFAULT_PROFILE)
    }
}

impl CredentialStrategy {
    /// Use an explicit access key pair in the given region.
    pub fn static_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::StaticKeys {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Use the SDK default provider chain.
    pub fn ambient() -> Self {
        Self::AmbientDiscovery
    }

    /// Use a named profile from the shared config files.
    pub fn named_profile(name: impl Into<String>) -> Self {
        Self::NamedProfile { name: name.into() }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StaticKeys { .. } => "static_keys",
            Self::AmbientDiscovery => "ambient_discovery",
            Self::NamedProfile { .. } => "named_profile",
        }
    }

    /// Reject values the SDK would only fail on later, after a network round trip.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::StaticKeys {
                access_key_id,
                secret_access_key,
                region,
            } => {
                if access_key_id.trim().is_empty() || secret_access_key.trim().is_empty() {
                    return Err(BlError::Config(
                        "static access key id and secret must not be empty".to_string(),
                    ));
                }
                if region.trim().is_empty() {
                    return Err(BlError::Config(
                        "static credentials require a region".to_string(),
                    ));
                }
                Ok(())
            }
            Self::AmbientDiscovery => Ok(()),
            Self::NamedProfile { name } => {
                if name.trim().is_empty() {
                    return Err(BlError::Config(
                        "profile name must not be empty".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Feed this strategy into an SDK config loader.
    pub fn apply(&self, loader: ConfigLoader) -> ConfigLoader {
        match self {
            Self::StaticKeys {
                access_key_id,
                secret_access_key,
                region,
            } => {
                let credentials = Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    STATIC_PROVIDER_NAME,
                );
                loader
                    .region(Region::new(region.clone()))
                    .credentials_provider(credentials)
            }
            Self::AmbientDiscovery => loader,
            Self::NamedProfile { name } => loader.profile_name(name),
        }
    }
}

// The secret key must never appear in Debug output.
impl fmt::Debug for CredentialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticKeys {
                access_key_id,
                region,
                ..
            } => f
                .debug_struct("StaticKeys")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .field("region", region)
                .finish(),
            Self::AmbientDiscovery => f.write_str("AmbientDiscovery"),
            Self::NamedProfile { name } => {
                f.debug_struct("NamedProfile").field("name", name).finish()
            }
        }
    }
}
