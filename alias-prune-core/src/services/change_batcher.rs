//! 变更批次提交

use std::sync::Arc;

use alias_prune_provider::{ChangeAction, ChangeBatch, ChangeInfo, ResourceRecord};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, log_provider_error};

/// Provider limit on changes per batch.
pub const MAX_CHANGES_PER_BATCH: usize = 100;

/// Splits records into provider-sized change batches and submits them in order.
pub struct ChangeBatcher {
    ctx: Arc<ServiceContext>,
}

impl ChangeBatcher {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Batch comment for an action.
    pub fn comment_for(action: ChangeAction) -> &'static str {
        match action {
            ChangeAction::Delete => "Deleting resource records",
            ChangeAction::Upsert => "Restoring resource records",
        }
    }

    /// Submit `records` to `zone_id` with `action`, at most
    /// [`MAX_CHANGES_PER_BATCH`] per call.
    ///
    /// Every record is checked before the first call. A rejected chunk stops
    /// the run; chunks already accepted are not rolled back.
    pub async fn submit(
        &self,
        zone_id: &str,
        records: &[ResourceRecord],
        action: ChangeAction,
    ) -> CoreResult<Vec<ChangeInfo>> {
        if let Some(record) = records.iter().find(|r| r.alias_target.is_none()) {
            return Err(CoreError::InvalidRecord {
                name: record.name.clone(),
                reason: "record has no alias target".to_string(),
            });
        }

        log::debug!("There are {} record(s) to {action}", records.len());

        let provider = self.ctx.provider();
        let comment = Self::comment_for(action);
        let mut accepted = Vec::with_capacity(records.len().div_ceil(MAX_CHANGES_PER_BATCH));

        for (index, chunk) in records.chunks(MAX_CHANGES_PER_BATCH).enumerate() {
            let start = index * MAX_CHANGES_PER_BATCH;
            log::debug!("Processing records {start} to {}", start + chunk.len());

            let batch = ChangeBatch::uniform(action, chunk, comment);
            let body = Self::batch_body(&batch);
            log::debug!("Attempting the following changes: {body}");

            match provider.change_records(zone_id, &batch).await {
                Ok(info) => {
                    log::debug!(
                        "Change request {} received ({:?})",
                        info.id,
                        info.status
                    );
                    accepted.push(info);
                }
                Err(e) => {
                    log::debug!("Rejected change batch {index}: {body}");
                    log_provider_error(
                        &format!("Change batch {index} ({action}) rejected"),
                        &e,
                    );
                    return Err(CoreError::SubmissionFailed {
                        chunk: index,
                        submitted: accepted.len(),
                        source: e,
                    });
                }
            }
        }

        Ok(accepted)
    }

    /// 完整批次 JSON，不截断
    fn batch_body(batch: &ChangeBatch) -> String {
        serde_json::to_string(batch).unwrap_or_else(|e| format!("<unserializable batch: {e}>"))
    }
}
