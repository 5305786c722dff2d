//! 过期别名记录清理服务

use std::sync::Arc;

use alias_prune_provider::{ChangeAction, summarize_names};
use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::{
    ChangeBatcher, RecordFilter, RecordService, ServiceContext, ZoneService, write_snapshot,
};
use crate::types::{CleanupReport, CleanupRequest, KeepList};

/// Delete workflow: resolve zone, list records, select candidates, write the
/// snapshot, then delete the candidates in batches.
pub struct CleanupService {
    zones: ZoneService,
    records: RecordService,
    batcher: ChangeBatcher,
}

impl CleanupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            zones: ZoneService::new(ctx.clone()),
            records: RecordService::new(ctx.clone()),
            batcher: ChangeBatcher::new(ctx),
        }
    }

    /// 执行清理
    ///
    /// The snapshot is written before any delete call and also on dry run.
    /// A snapshot failure aborts the run with nothing deleted.
    pub async fn run(&self, request: &CleanupRequest) -> CoreResult<CleanupReport> {
        let started_at = Utc::now();

        if request.target_alias.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "target alias must not be empty".to_string(),
            ));
        }

        let zone = self.zones.resolve(&request.hosted_zone).await?;
        let all_records = self.records.list_all(&zone.id).await?;

        let keep_list = KeepList::expand(&request.keep_list, &zone.name);
        if !keep_list.is_empty() {
            log::info!(
                "Records matching the following keep list will NOT be removed: {:?}",
                keep_list.iter().collect::<Vec<_>>()
            );
        }
        let filter = RecordFilter::new(&zone.name, &request.target_alias, keep_list);
        let (candidates, skipped) = filter.select(&all_records);

        let snapshot_path = write_snapshot(&candidates, request.snapshot_dir.as_deref())?;
        log::info!(
            "Records to be deleted written to \"{}\"",
            snapshot_path.display()
        );
        log::info!("Found {} record(s) to be deleted", candidates.len());
        if !candidates.is_empty() {
            log::debug!(
                "Selected: {}",
                summarize_names(candidates.iter().map(|r| r.name.as_str()))
            );
        }

        let changes = if request.dry_run {
            log::info!("dryrun selected - no records deleted");
            Vec::new()
        } else {
            log::info!("Deleting records... (started {})", Utc::now().to_rfc3339());
            let changes = match self
                .batcher
                .submit(&zone.id, &candidates, ChangeAction::Delete)
                .await
            {
                Ok(changes) => changes,
                Err(e) => {
                    log::warn!(
                        "Deletion stopped early; to restore the selected records, use --restore {}",
                        snapshot_path.display()
                    );
                    return Err(e);
                }
            };
            log::info!("Deletion submitted (finished {})", Utc::now().to_rfc3339());
            log::info!(
                "Record deletion complete (or pending) - check the provider console to make sure things are as expected."
            );
            log::info!(
                "To restore these records, use --restore {}",
                snapshot_path.display()
            );
            changes
        };

        Ok(CleanupReport {
            zone_id: zone.id,
            zone_name: zone.name,
            target_alias: filter.target_alias().to_string(),
            scanned: all_records.len(),
            skipped,
            candidates: candidates.len(),
            snapshot_path,
            changes,
            dry_run: request.dry_run,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alias_prune_provider::RecordType;

    use crate::services::read_snapshot;
    use crate::test_utils::{
        MockCall, MockDnsProvider, NEW_LB, OLD_LB, TEST_ZONE_ID, alias_record, capture_logs,
        captured_logs, create_test_context, numbered_alias_records, plain_record, throttled,
    };

    fn request(dir: &std::path::Path, dry_run: bool) -> CleanupRequest {
        CleanupRequest {
            hosted_zone: "example.com".to_string(),
            target_alias: "old-lb.us-east-1.elb.amazonaws.com".to_string(),
            keep_list: vec!["www".to_string()],
            dry_run,
            snapshot_dir: Some(dir.to_path_buf()),
        }
    }

    fn three_records() -> Vec<crate::types::ResourceRecord> {
        vec![
            alias_record("api.example.com.", OLD_LB),
            alias_record("web.example.com.", NEW_LB),
            plain_record("mail.example.com.", RecordType::Mx),
        ]
    }

    #[tokio::test]
    async fn dry_run_snapshots_single_match_without_deleting() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(MockDnsProvider::new().with_records(three_records()));
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let report = svc.run(&request(dir.path(), true)).await.unwrap();

        assert!(report.dry_run);
        assert_eq!(report.scanned, 3);
        assert_eq!(report.candidates, 1);
        assert!(report.changes.is_empty());
        assert_eq!(report.target_alias, OLD_LB);

        let snapshot = read_snapshot(&report.snapshot_path).unwrap();
        assert_eq!(snapshot, vec![alias_record("api.example.com.", OLD_LB)]);
        assert!(mock.batches().await.is_empty());
    }

    #[tokio::test]
    async fn deletes_candidates_after_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut records = vec![
            plain_record("example.com.", RecordType::Soa),
            alias_record("example.com.", OLD_LB),
            alias_record("www.example.com.", OLD_LB),
        ];
        records.extend(numbered_alias_records(120));
        let mock = Arc::new(MockDnsProvider::new().with_records(records));
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let report = svc.run(&request(dir.path(), false)).await.unwrap();

        assert_eq!(report.candidates, 120);
        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.skipped.record_type, 1);
        assert_eq!(report.skipped.zone_apex, 1);
        assert_eq!(report.skipped.keep_list, 1);

        let batches = mock.batches().await;
        assert_eq!(batches.len(), 2);
        for (zone_id, batch) in &batches {
            assert_eq!(zone_id, TEST_ZONE_ID);
            assert_eq!(batch.comment, "Deleting resource records");
            assert!(batch.changes.iter().all(|c| c.action == ChangeAction::Delete));
        }
        let deleted: Vec<_> = batches
            .iter()
            .flat_map(|(_, b)| b.changes.iter().map(|c| c.record.clone()))
            .collect();
        assert_eq!(read_snapshot(&report.snapshot_path).unwrap(), deleted);
    }

    #[tokio::test]
    async fn keep_list_is_announced_at_info() {
        capture_logs();
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(MockDnsProvider::new().with_records(three_records()));
        let svc = CleanupService::new(create_test_context(mock));

        svc.run(&request(dir.path(), true)).await.unwrap();

        let logs = captured_logs();
        assert!(
            logs.iter().any(|(level, msg)| *level == log::Level::Info
                && msg.contains("will NOT be removed")
                && msg.contains("www.example.com.")),
            "keep list not logged at info: {logs:?}"
        );
    }

    #[tokio::test]
    async fn snapshot_failure_aborts_before_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(MockDnsProvider::new().with_records(three_records()));
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let mut req = request(dir.path(), false);
        req.snapshot_dir = Some(dir.path().join("missing"));

        let result = svc.run(&req).await;
        assert!(matches!(result, Err(CoreError::SnapshotIo { .. })));
        assert!(mock.batches().await.is_empty());
    }

    #[tokio::test]
    async fn missing_zone_aborts_before_listing() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(MockDnsProvider::new().with_records(three_records()));
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let mut req = request(dir.path(), false);
        req.hosted_zone = "nothing-here.org".to_string();

        let result = svc.run(&req).await;
        assert!(matches!(result, Err(CoreError::ZoneNotFound(_))));
        assert!(
            !mock
                .calls()
                .await
                .iter()
                .any(|c| matches!(c, MockCall::ListRecords { .. }))
        );
    }

    #[tokio::test]
    async fn listing_failure_writes_no_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(
            MockDnsProvider::new()
                .with_record_pages(vec![three_records(), three_records()])
                .fail_record_page(1, throttled()),
        );
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let result = svc.run(&request(dir.path(), false)).await;
        assert!(matches!(result, Err(CoreError::ListingFailed { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn submission_failure_keeps_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(
            MockDnsProvider::new()
                .with_records(numbered_alias_records(150))
                .fail_change(1, throttled()),
        );
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let result = svc.run(&request(dir.path(), false)).await;
        assert!(matches!(
            result,
            Err(CoreError::SubmissionFailed {
                chunk: 1,
                submitted: 1,
                ..
            })
        ));
        // 快照保留，用于 --restore
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn empty_target_alias_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mock = Arc::new(MockDnsProvider::new());
        let svc = CleanupService::new(create_test_context(mock.clone()));

        let mut req = request(dir.path(), true);
        req.target_alias = " ".to_string();

        let result = svc.run(&req).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert!(mock.calls().await.is_empty());
    }
}
