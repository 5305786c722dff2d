//! 快照恢复服务

use std::sync::Arc;

use alias_prune_provider::ChangeAction;

use crate::error::CoreResult;
use crate::services::{ChangeBatcher, ServiceContext, ZoneService, read_snapshot};
use crate::types::{RestoreReport, RestoreRequest};

/// Replays a snapshot as UPSERT changes.
pub struct RestoreService {
    zones: ZoneService,
    batcher: ChangeBatcher,
}

impl RestoreService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            zones: ZoneService::new(ctx.clone()),
            batcher: ChangeBatcher::new(ctx),
        }
    }

    /// 从快照恢复记录
    ///
    /// The snapshot is read before any provider call, so a missing or
    /// malformed file fails without touching the zone. Records are submitted
    /// as-is to the zone named in the request.
    pub async fn restore(&self, request: &RestoreRequest) -> CoreResult<RestoreReport> {
        let records = read_snapshot(&request.snapshot_path)?;
        let zone = self.zones.resolve(&request.hosted_zone).await?;

        log::info!(
            "Restoring {} record(s) from {} into {}...",
            records.len(),
            request.snapshot_path.display(),
            zone.name
        );

        let changes = self
            .batcher
            .submit(&zone.id, &records, ChangeAction::Upsert)
            .await?;

        log::info!(
            "Record restoration initiated ({} change batch(es)) - check the provider console to make sure it completed.",
            changes.len()
        );

        Ok(RestoreReport {
            zone_id: zone.id,
            zone_name: zone.name,
            snapshot_path: request.snapshot_path.clone(),
            restored: records.len(),
            changes,
        })
    }
}
