use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned by every [`DnsProvider`](crate::DnsProvider) call.
///
/// Every variant names the `provider` it came from. Serialized form is tagged
/// by `code`, so a JSON report carries e.g. `{"code":"RateLimited",...}`.
///
/// Nothing in this crate retries. Transient failures ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited)) reach the caller
/// like any other error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection, DNS or TLS failure before a response arrived.
    NetworkError { provider: String, detail: String },

    /// Keys or profile rejected, expired or missing.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// Authenticated, but the IAM policy doesn't allow the call.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// Throttled, or an earlier change on the zone is still being applied.
    RateLimited {
        provider: String,
        raw_message: Option<String>,
    },

    Timeout { provider: String, detail: String },

    /// No hosted zone with this id.
    ZoneNotFound {
        provider: String,
        zone: String,
        raw_message: Option<String>,
    },

    /// The provider refused a change batch. None of its changes were applied.
    InvalidChangeBatch {
        provider: String,
        /// One entry per rejected change.
        messages: Vec<String>,
    },

    /// A request argument (or local credential setting) is malformed.
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// The response could not be interpreted.
    ParseError { provider: String, detail: String },

    /// A request could not be built from local data.
    SerializationError { provider: String, detail: String },

    /// Error code with no dedicated variant.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期错误（配置、权限、资源不存在等）
    ///
    /// `true` 记 `warn`，`false` 记 `error`。新增变体时同步更新。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Name of the provider that produced this error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ZoneNotFound { provider, .. }
            | Self::InvalidChangeBatch { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::SerializationError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

/// `[provider] summary` or `[provider] summary: detail`.
fn write_tagged(
    f: &mut fmt::Formatter<'_>,
    provider: &str,
    summary: &str,
    detail: Option<&str>,
) -> fmt::Result {
    match detail {
        Some(detail) if !detail.is_empty() => write!(f, "[{provider}] {summary}: {detail}"),
        _ => write!(f, "[{provider}] {summary}"),
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write_tagged(f, provider, "Network error", Some(detail))
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => write_tagged(f, provider, "Invalid credentials", raw_message.as_deref()),
            Self::PermissionDenied {
                provider,
                raw_message,
            } => write_tagged(f, provider, "Permission denied", raw_message.as_deref()),
            Self::RateLimited {
                provider,
                raw_message,
            } => write_tagged(f, provider, "Rate limited", raw_message.as_deref()),
            Self::Timeout { provider, detail } => {
                write_tagged(f, provider, "Request timeout", Some(detail))
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => write_tagged(
                f,
                provider,
                &format!("Zone '{zone}' not found"),
                raw_message.as_deref(),
            ),
            Self::InvalidChangeBatch { provider, messages } => {
                write_tagged(f, provider, "Invalid change batch", Some(&messages.join("; ")))
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => write_tagged(
                f,
                provider,
                &format!("Invalid parameter '{param}'"),
                Some(detail),
            ),
            Self::ParseError { provider, detail } => {
                write_tagged(f, provider, "Parse error", Some(detail))
            }
            Self::SerializationError { provider, detail } => {
                write_tagged(f, provider, "Serialization error", Some(detail))
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => write_tagged(
                f,
                provider,
                raw_code.as_deref().unwrap_or("Unknown error"),
                Some(raw_message),
            ),
        }
    }
}

impl std::error::Error for ProviderError {}

/// `Result<T, ProviderError>`
pub type Result<T> = std::result::Result<T, ProviderError>;
