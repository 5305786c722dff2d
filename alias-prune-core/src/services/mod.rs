//! 业务逻辑服务层

mod change_batcher;
mod cleanup_service;
mod record_filter;
mod record_service;
mod restore_service;
mod snapshot;
mod zone_service;

pub use change_batcher::{ChangeBatcher, MAX_CHANGES_PER_BATCH};
pub use cleanup_service::CleanupService;
pub use record_filter::{MONITORED_TYPE, RecordFilter};
pub use record_service::RecordService;
pub use restore_service::RestoreService;
pub use snapshot::{SNAPSHOT_SUFFIX, read_snapshot, write_snapshot};
pub use zone_service::ZoneService;

use std::sync::Arc;

use alias_prune_provider::{DnsProvider, ProviderError};

/// 服务上下文 - 持有所有依赖
///
/// 前端创建此上下文并注入已认证的 Provider。
pub struct ServiceContext {
    provider: Arc<dyn DnsProvider>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// 获取 Provider 实例
    pub fn provider(&self) -> &Arc<dyn DnsProvider> {
        &self.provider
    }
}

/// 按错误类型选择日志级别
pub(crate) fn log_provider_error(action: &str, err: &ProviderError) {
    if err.is_expected() {
        log::warn!("{action}: {err}");
    } else {
        log::error!("{action}: {err}");
    }
}
