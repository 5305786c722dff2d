//! 托管区域解析服务

use std::sync::Arc;

use alias_prune_provider::{HostedZone, ProviderError, ensure_trailing_dot};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, log_provider_error};

/// 托管区域解析服务
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 按名称查找托管区域
    ///
    /// Walks every page of the zone list looking for an exact match on the
    /// normalized name, then fetches the zone by id. `example.com` and
    /// `example.com.` resolve identically.
    pub async fn resolve(&self, zone_name: &str) -> CoreResult<HostedZone> {
        let wanted = ensure_trailing_dot(zone_name.trim());
        if wanted == "." {
            return Err(CoreError::ValidationError(
                "hosted zone name must not be empty".to_string(),
            ));
        }

        let provider = self.ctx.provider();
        let mut marker: Option<String> = None;

        loop {
            let page = provider
                .list_hosted_zones(marker.as_deref())
                .await
                .map_err(|e| Self::unavailable(&wanted, e))?;

            if let Some(found) = page.zones.iter().find(|z| z.name == wanted) {
                let mut zone = provider
                    .get_hosted_zone(&found.id)
                    .await
                    .map_err(|e| Self::unavailable(&wanted, e))?;
                zone.name = ensure_trailing_dot(&zone.name);

                log::info!("Resolved hosted zone {} ({})", zone.name, zone.id);
                if let Some(count) = zone.record_count {
                    log::debug!("Zone {} reports {count} record set(s)", zone.name);
                }
                if zone.private_zone == Some(true) {
                    log::debug!("Zone {} is a private zone", zone.name);
                }
                return Ok(zone);
            }

            match page.next_marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        log::error!("Hosted zone {wanted} does not exist");
        Err(CoreError::ZoneNotFound(wanted))
    }

    fn unavailable(zone: &str, err: ProviderError) -> CoreError {
        log_provider_error(&format!("Failed to look up hosted zone {zone}"), &err);
        CoreError::ZoneUnavailable {
            zone: zone.to_string(),
            source: err,
        }
    }
}
