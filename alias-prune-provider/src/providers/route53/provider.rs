//! Route 53 DnsProvider trait 实现

use async_trait::async_trait;
use aws_sdk_route53::types::RrType;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    ChangeBatch, ChangeInfo, HostedZone, RecordCursor, RecordPage, ZonePage,
};

use super::Route53Provider;
use super::convert::{
    batch_to_sdk, change_info_from_sdk, cursor_from_sdk, record_from_sdk, zone_from_sdk,
};

#[async_trait]
impl DnsProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<ZonePage> {
        let output = self
            .client
            .list_hosted_zones()
            .set_marker(marker.map(str::to_string))
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::default()))?;

        let zones: Vec<HostedZone> = output.hosted_zones().iter().map(zone_from_sdk).collect();
        let next_marker = if output.is_truncated() {
            output.next_marker().map(str::to_string)
        } else {
            None
        };

        log::debug!(
            "[route53] list_hosted_zones: {} zone(s), truncated={}",
            zones.len(),
            next_marker.is_some()
        );

        Ok(ZonePage { zones, next_marker })
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone> {
        let output = self
            .client
            .get_hosted_zone()
            .id(zone_id)
            .send()
            .await
            .map_err(|e| self.map_sdk_error(e, ErrorContext::zone(zone_id)))?;

        output
            .hosted_zone()
            .map(zone_from_sdk)
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: zone_id.to_string(),
                raw_message: None,
            })
    }

    async fn list_records(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<RecordPage> {
        let request = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .set_start_record_name(cursor.map(|c| c.name.clone()))
            .set_start_record_type(
                cursor
                    .and_then(|c| c.record_type.as_ref())
                    .map(|t| RrType::from(t.as_str())),
            )
            .set_start_record_identifier(cursor.and_then(|c| c.identifier.clone()));

        let output = request.send().await.map_err(|e| {
            self.map_sdk_error(
                e,
                ErrorContext {
                    zone: Some(zone_id.to_string()),
                    param: cursor.map(|_| "StartRecordName".to_string()),
                },
            )
        })?;

        let records = output
            .resource_record_sets()
            .iter()
            .map(record_from_sdk)
            .collect::<Vec<_>>();

        let next = if output.is_truncated() {
            cursor_from_sdk(
                output.next_record_name(),
                output.next_record_type(),
                output.next_record_identifier(),
            )
        } else {
            None
        };

        log::debug!(
            "[route53] list_records {zone_id}: {} record(s), truncated={}",
            records.len(),
            next.is_some()
        );

        Ok(RecordPage { records, next })
    }

    async fn change_records(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let change_batch = batch_to_sdk(batch).map_err(|e| self.serialization_error(e))?;

        log::debug!(
            "[route53] change_records {zone_id}: {} change(s), comment={:?}",
            batch.len(),
            batch.comment
        );

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(change_batch)
            .send()
            .await
            .map_err(|e| self.map_change_error(e, ErrorContext::zone(zone_id)))?;

        output
            .change_info()
            .map(change_info_from_sdk)
            .ok_or_else(|| self.parse_error("response is missing ChangeInfo"))
    }
}
