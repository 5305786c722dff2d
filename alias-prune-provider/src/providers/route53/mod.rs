//! AWS Route 53 DNS Provider

mod convert;
mod error;
mod provider;

use aws_sdk_route53::Client;
use aws_sdk_route53::config::{BehaviorVersion, Credentials, Region};

use crate::error::{ProviderError, Result};
use crate::types::ProviderCredentials;

/// Route 53 is a global service; its control plane lives in us-east-1.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Name recorded on static credentials handed to the SDK.
const CREDENTIALS_PROVIDER_NAME: &str = "alias-prune";

/// AWS Route 53 DNS Provider
pub struct Route53Provider {
    pub(crate) client: Client,
}

impl Route53Provider {
    /// Wrap an already-configured SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from explicit credentials or a named profile.
    pub async fn from_credentials(credentials: &ProviderCredentials) -> Result<Self> {
        credentials
            .validate()
            .map_err(|field| ProviderError::InvalidParameter {
                provider: "route53".to_string(),
                param: field.to_string(),
                detail: "must not be empty".to_string(),
            })?;

        let region = Region::new(credentials.region().unwrap_or(DEFAULT_REGION).to_string());
        let loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        let loader = match credentials {
            ProviderCredentials::Route53 {
                access_key_id,
                secret_access_key,
                session_token,
                ..
            } => loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None, // expiry
                CREDENTIALS_PROVIDER_NAME,
            )),
            ProviderCredentials::Route53Profile { profile_name, .. } => {
                loader.profile_name(profile_name)
            }
        };

        let sdk_config = loader.load().await;
        log::debug!(
            "[route53] SDK configured (region={:?})",
            sdk_config.region().map(ToString::to_string)
        );

        Ok(Self::new(Client::new(&sdk_config)))
    }
}
