use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeBatch, ChangeInfo, HostedZone, RecordCursor, RecordPage, ZonePage};

/// SDK 返回的错误码与消息
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// AWS error code, e.g. `NoSuchHostedZone`
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// What the failed call was about; fills in variant fields the SDK error lacks.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone id the call targeted
    pub zone: Option<String>,
    /// Request field blamed for `InvalidInput`
    pub param: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone: Some(zone_id.to_string()),
            param: None,
        }
    }
}

/// Maps a provider's native error codes onto [`ProviderError`].
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    /// 按错误码映射
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Unmapped code
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS 提供商 Trait
///
/// Every method is a single provider round trip. Pagination is exposed
/// page-by-page so callers decide how to handle a failure part-way through.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取托管区域列表（单页）
    ///
    /// `marker` is the `next_marker` of the previous page, `None` for the first page.
    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<ZonePage>;

    /// 获取托管区域详情
    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone>;

    /// 获取 DNS 记录列表（单页）
    ///
    /// `cursor` is the `next` cursor of the previous page, `None` for the first page.
    async fn list_records(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<RecordPage>;

    /// 提交变更批次
    ///
    /// The batch is applied atomically by the provider. A successful return means the
    /// change was accepted; it may still be propagating (see [`ChangeInfo::status`]).
    async fn change_records(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;
}
