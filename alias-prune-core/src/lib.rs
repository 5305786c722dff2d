//! alias-prune Core Library
//!
//! Business logic for pruning stale alias records from a hosted zone:
//! - Zone resolution and record listing
//! - Record selection (`RecordFilter`, `KeepList`)
//! - Snapshot before delete, restore from snapshot
//! - Chunked change-batch submission
//!
//! Provider-agnostic: every provider call goes through
//! [`alias_prune_provider::DnsProvider`].

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    ChangeBatcher, CleanupService, RecordFilter, RecordService, RestoreService, ServiceContext,
    ZoneService, read_snapshot, write_snapshot,
};
pub use types::{
    CleanupReport, CleanupRequest, FilterDecision, KeepList, RestoreReport, RestoreRequest,
    SkipCounts, SkipReason,
};
