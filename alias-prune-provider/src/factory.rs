//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// Credentials are validated before any SDK configuration is loaded, so a
/// missing key or profile name fails here without touching the network.
///
/// # Examples
///
/// ```rust,no_run
/// use alias_prune_provider::{create_provider, ProviderCredentials};
///
/// # async fn example() -> alias_prune_provider::Result<()> {
/// let provider = create_provider(ProviderCredentials::Route53Profile {
///     profile_name: "dns-admin".to_string(),
///     region: None,
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    #[cfg(feature = "route53")]
    {
        let provider = Route53Provider::from_credentials(&credentials).await?;
        Ok(Arc::new(provider))
    }

    #[cfg(not(feature = "route53"))]
    {
        Err(crate::error::ProviderError::InvalidParameter {
            provider: "route53".to_string(),
            param: "provider".to_string(),
            detail: format!(
                "provider support not compiled in (enable the `route53` feature): {credentials:?}"
            ),
        })
    }
}
