//! Cleanup / restore request and report types

use std::fmt;
use std::path::PathBuf;

use alias_prune_provider::ChangeInfo;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 删除流程参数
#[derive(Debug, Clone, Default)]
pub struct CleanupRequest {
    /// Hosted zone name, with or without trailing dot.
    pub hosted_zone: String,
    /// Alias DNS name whose records are pruned.
    pub target_alias: String,
    /// Relative names to protect (`*` allowed).
    pub keep_list: Vec<String>,
    /// Write the snapshot but submit no deletion.
    pub dry_run: bool,
    /// Directory for the snapshot; system temp dir when `None`.
    pub snapshot_dir: Option<PathBuf>,
}

/// 恢复流程参数
#[derive(Debug, Clone)]
pub struct RestoreRequest {
    /// Hosted zone the snapshot records belong to.
    pub hosted_zone: String,
    /// Snapshot written by a previous cleanup run.
    pub snapshot_path: PathBuf,
}

/// Why a record was not selected for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// Not of the monitored record type.
    RecordType,
    /// The zone apex itself.
    ZoneApex,
    /// Protected by the keep list.
    KeepList,
    /// Not an alias record.
    NoAliasTarget,
    /// Alias points somewhere else.
    AliasMismatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::RecordType => "incorrect record type",
            Self::ZoneApex => "it is the zone being searched",
            Self::KeepList => "it is in the keep list",
            Self::NoAliasTarget => "it doesn't have an alias target",
            Self::AliasMismatch => "alias target doesn't match",
        };
        f.write_str(text)
    }
}

/// Per-record selection outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Candidate,
    Skip(SkipReason),
}

impl FilterDecision {
    pub fn is_candidate(self) -> bool {
        matches!(self, Self::Candidate)
    }
}

/// Skip tally by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipCounts {
    pub record_type: usize,
    pub zone_apex: usize,
    pub keep_list: usize,
    pub no_alias_target: usize,
    pub alias_mismatch: usize,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        let slot = match reason {
            SkipReason::RecordType => &mut self.record_type,
            SkipReason::ZoneApex => &mut self.zone_apex,
            SkipReason::KeepList => &mut self.keep_list,
            SkipReason::NoAliasTarget => &mut self.no_alias_target,
            SkipReason::AliasMismatch => &mut self.alias_mismatch,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.record_type + self.zone_apex + self.keep_list + self.no_alias_target + self.alias_mismatch
    }
}

/// 删除流程结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupReport {
    pub zone_id: String,
    pub zone_name: String,
    /// Normalized target alias (trailing dot).
    pub target_alias: String,
    /// Records listed from the zone.
    pub scanned: usize,
    pub skipped: SkipCounts,
    /// Records written to the snapshot (and deleted unless dry run).
    pub candidates: usize,
    pub snapshot_path: PathBuf,
    /// Accepted change batches, in submission order. Empty on dry run.
    pub changes: Vec<ChangeInfo>,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// 恢复流程结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreReport {
    pub zone_id: String,
    pub zone_name: String,
    pub snapshot_path: PathBuf,
    /// Records submitted as UPSERT.
    pub restored: usize,
    pub changes: Vec<ChangeInfo>,
}
