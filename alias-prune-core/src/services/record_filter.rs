//! 记录筛选

use alias_prune_provider::{RecordType, ResourceRecord, ensure_trailing_dot};

use crate::types::{FilterDecision, KeepList, SkipCounts, SkipReason};

/// Record type the cleanup inspects.
pub const MONITORED_TYPE: RecordType = RecordType::A;

/// Decides, per record, whether it is a deletion candidate.
///
/// Checks run in a fixed order and the first failing check names the skip
/// reason: record type, zone apex, keep list, alias presence, alias target.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    zone_name: String,
    target_alias: String,
    keep_list: KeepList,
}

impl RecordFilter {
    /// Zone name and target alias are normalized to a trailing dot.
    pub fn new(zone_name: &str, target_alias: &str, keep_list: KeepList) -> Self {
        Self {
            zone_name: ensure_trailing_dot(zone_name.trim()),
            target_alias: ensure_trailing_dot(target_alias.trim()),
            keep_list,
        }
    }

    pub fn target_alias(&self) -> &str {
        &self.target_alias
    }

    pub fn decide(&self, record: &ResourceRecord) -> FilterDecision {
        if record.record_type != MONITORED_TYPE {
            return FilterDecision::Skip(SkipReason::RecordType);
        }
        if record.name == self.zone_name {
            return FilterDecision::Skip(SkipReason::ZoneApex);
        }
        if self.keep_list.contains(&record.name) {
            return FilterDecision::Skip(SkipReason::KeepList);
        }
        let Some(alias) = &record.alias_target else {
            return FilterDecision::Skip(SkipReason::NoAliasTarget);
        };
        if alias.dns_name != self.target_alias {
            return FilterDecision::Skip(SkipReason::AliasMismatch);
        }
        FilterDecision::Candidate
    }

    /// Split `records` into candidates (input order kept) and skip tallies.
    pub fn select(&self, records: &[ResourceRecord]) -> (Vec<ResourceRecord>, SkipCounts) {
        let mut candidates = Vec::new();
        let mut skipped = SkipCounts::default();

        for record in records {
            match self.decide(record) {
                FilterDecision::Candidate => {
                    log::debug!("To be deleted: {}", record.name);
                    candidates.push(record.clone());
                }
                FilterDecision::Skip(SkipReason::RecordType) => {
                    log::debug!(
                        "Skipping {} because of {} ({})",
                        record.name,
                        SkipReason::RecordType,
                        record.record_type
                    );
                    skipped.record(SkipReason::RecordType);
                }
                FilterDecision::Skip(reason) => {
                    log::debug!("Skipping {} because {reason}", record.name);
                    skipped.record(reason);
                }
            }
        }

        (candidates, skipped)
    }
}
