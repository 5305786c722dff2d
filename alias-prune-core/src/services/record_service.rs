//! 记录列表服务

use std::sync::Arc;

use alias_prune_provider::{ProviderError, RecordCursor, ResourceRecord};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, log_provider_error};

/// 记录列表服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取区域内全部记录
    ///
    /// All-or-nothing: a failed page aborts the listing and no partial list
    /// is returned.
    pub async fn list_all(&self, zone_id: &str) -> CoreResult<Vec<ResourceRecord>> {
        let provider = self.ctx.provider();
        let mut records = Vec::new();
        let mut cursor: Option<RecordCursor> = None;
        let mut pages = 0usize;

        loop {
            let page = provider
                .list_records(zone_id, cursor.as_ref())
                .await
                .map_err(|e| Self::listing_failed(zone_id, e))?;
            pages += 1;
            records.extend(page.records);

            match page.next {
                Some(next) if cursor.as_ref() == Some(&next) => {
                    // 游标未前进，避免死循环
                    return Err(Self::listing_failed(
                        zone_id,
                        ProviderError::ParseError {
                            provider: provider.id().to_string(),
                            detail: format!("pagination cursor did not advance past '{}'", next.name),
                        },
                    ));
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        log::debug!(
            "Listed {} record(s) from zone {zone_id} in {pages} page(s)",
            records.len()
        );
        Ok(records)
    }

    fn listing_failed(zone_id: &str, err: ProviderError) -> CoreError {
        log_provider_error(&format!("Failed to list records in zone {zone_id}"), &err);
        CoreError::ListingFailed {
            zone_id: zone_id.to_string(),
            source: err,
        }
    }
}
