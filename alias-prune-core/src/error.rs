//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

// Re-export library error type
pub use alias_prune_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// No hosted zone with this name in the account
    #[error("Hosted zone not found: {0}")]
    ZoneNotFound(String),

    /// Zone lookup failed at the provider
    #[error("Hosted zone '{zone}' unavailable")]
    ZoneUnavailable {
        zone: String,
        #[source]
        source: ProviderError,
    },

    /// A record page could not be fetched; no partial list is returned
    #[error("Failed to list records in zone {zone_id}")]
    ListingFailed {
        zone_id: String,
        #[source]
        source: ProviderError,
    },

    /// A record cannot be expressed as an alias change
    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Snapshot file could not be written or read
    #[error("Snapshot I/O error at {}", path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content could not be (de)serialized
    #[error("Snapshot format error at {}: {detail}", path.display())]
    SnapshotFormat { path: PathBuf, detail: String },

    /// Restore file path does not exist
    #[error("Restore file not found: {}", .0.display())]
    RestoreFileNotFound(PathBuf),

    /// A change batch was rejected; earlier chunks stay applied
    #[error("Change batch {chunk} rejected after {submitted} accepted batch(es)")]
    SubmissionFailed {
        /// Zero-based index of the failing chunk
        chunk: usize,
        /// Chunks already accepted by the provider
        submitted: usize,
        #[source]
        source: ProviderError,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ZoneNotFound(_)
            | Self::InvalidRecord { .. }
            | Self::RestoreFileNotFound(_)
            | Self::SnapshotFormat { .. }
            | Self::ValidationError(_) => true,
            Self::ZoneUnavailable { source, .. }
            | Self::ListingFailed { source, .. }
            | Self::SubmissionFailed { source, .. }
            | Self::Provider(source) => source.is_expected(),
            Self::SnapshotIo { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
