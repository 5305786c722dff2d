//! # alias-prune-provider
//!
//! DNS provider abstraction used by alias-prune: hosted-zone lookup, paginated
//! record-set listing and atomic change-batch submission.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [AWS Route 53](https://aws.amazon.com/route53/) | `route53` | Access key pair or shared-config profile |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alias_prune_provider::{create_provider, DnsProvider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Route53 {
//!         access_key_id: "AKIA...".to_string(),
//!         secret_access_key: "secret".to_string(),
//!         session_token: None,
//!         region: None,
//!     })
//!     .await?;
//!
//!     let page = provider.list_hosted_zones(None).await?;
//!     for zone in &page.zones {
//!         println!("{} ({})", zone.name, zone.id);
//!     }
//!
//!     let records = provider.list_records(&page.zones[0].id, None).await?;
//!     for record in &records.records {
//!         println!("{} {}", record.name, record.record_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Nothing is retried; throttling surfaces as [`ProviderError::RateLimited`] and
//! a rejected batch as [`ProviderError::InvalidChangeBatch`].

mod error;
mod factory;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone,
    ProviderCredentials, RecordCursor, RecordPage, RecordType, ResourceRecord, ZonePage,
};

// Re-export utils
pub use utils::fqdn::{WILDCARD_ESCAPE, ensure_trailing_dot, escape_wildcards, qualify};
pub use utils::log_sanitizer::{summarize_names, truncate_for_log};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53")]
pub use providers::Route53Provider;
