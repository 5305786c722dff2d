//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::sync::Arc;

use alias_prune_provider::{
    AliasTarget, ChangeBatch, ChangeInfo, ChangeStatus, DnsProvider, HostedZone, ProviderError,
    RecordCursor, RecordPage, RecordType, ResourceRecord, Result, ZonePage,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::services::ServiceContext;

/// Hosted zone id used by [`test_zone`].
pub const TEST_ZONE_ID: &str = "/hostedzone/ZTEST123";
/// Alias target zone id (an ELB canonical zone).
pub const TARGET_ZONE_ID: &str = "Z35SXDOTRQ7X7K";
/// Target alias the tests prune.
pub const OLD_LB: &str = "old-lb.us-east-1.elb.amazonaws.com.";
/// An alias target the tests keep.
pub const NEW_LB: &str = "new-lb.us-east-1.elb.amazonaws.com.";

// ===== MockDnsProvider =====

/// Provider call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListHostedZones(Option<String>),
    GetHostedZone(String),
    ListRecords {
        zone_id: String,
        cursor: Option<RecordCursor>,
    },
    ChangeRecords {
        zone_id: String,
        batch: ChangeBatch,
    },
}

/// Scripted in-memory provider.
///
/// Zones and record pages are fixed at construction; every call is recorded.
pub struct MockDnsProvider {
    zone_pages: Vec<Vec<HostedZone>>,
    record_pages: Vec<Vec<ResourceRecord>>,
    list_zones_error: Option<ProviderError>,
    get_zone_error: Option<ProviderError>,
    /// (页号, 错误)：获取该页记录时失败
    record_page_error: Option<(usize, ProviderError)>,
    /// (第几次提交, 错误)：该次 change_records 失败
    change_error: Option<(usize, ProviderError)>,
    /// 记录分页游标停在第二页
    stuck_cursor: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            zone_pages: vec![vec![test_zone()]],
            record_pages: vec![Vec::new()],
            list_zones_error: None,
            get_zone_error: None,
            record_page_error: None,
            change_error: None,
            stuck_cursor: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_zone_pages(mut self, pages: Vec<Vec<HostedZone>>) -> Self {
        self.zone_pages = pages;
        self
    }

    /// Single page of records.
    pub fn with_records(self, records: Vec<ResourceRecord>) -> Self {
        self.with_record_pages(vec![records])
    }

    pub fn with_record_pages(mut self, pages: Vec<Vec<ResourceRecord>>) -> Self {
        self.record_pages = pages;
        self
    }

    pub fn fail_list_zones(mut self, err: ProviderError) -> Self {
        self.list_zones_error = Some(err);
        self
    }

    pub fn fail_get_zone(mut self, err: ProviderError) -> Self {
        self.get_zone_error = Some(err);
        self
    }

    pub fn fail_record_page(mut self, page: usize, err: ProviderError) -> Self {
        self.record_page_error = Some((page, err));
        self
    }

    /// Second record page hands back its own cursor as `next`.
    pub fn with_stuck_cursor(mut self) -> Self {
        self.stuck_cursor = true;
        self
    }

    /// Fail the `nth` (zero-based) change submission.
    pub fn fail_change(mut self, nth: usize, err: ProviderError) -> Self {
        self.change_error = Some((nth, err));
        self
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().await.clone()
    }

    /// Submitted change batches, in order.
    pub async fn batches(&self) -> Vec<(String, ChangeBatch)> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|call| match call {
                MockCall::ChangeRecords { zone_id, batch } => {
                    Some((zone_id.clone(), batch.clone()))
                }
                _ => None,
            })
            .collect()
    }

    fn page_cursor(page: usize) -> RecordCursor {
        RecordCursor {
            name: format!("page-{page}"),
            record_type: Some(RecordType::A),
            identifier: None,
        }
    }

    fn page_index(cursor: Option<&RecordCursor>) -> usize {
        cursor
            .and_then(|c| c.name.strip_prefix("page-"))
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones(&self, marker: Option<&str>) -> Result<ZonePage> {
        self.calls
            .lock()
            .await
            .push(MockCall::ListHostedZones(marker.map(str::to_string)));

        if let Some(err) = &self.list_zones_error {
            return Err(err.clone());
        }

        let index = marker.and_then(|m| m.parse::<usize>().ok()).unwrap_or(0);
        let zones = self.zone_pages.get(index).cloned().unwrap_or_default();
        let next_marker = (index + 1 < self.zone_pages.len()).then(|| (index + 1).to_string());
        Ok(ZonePage { zones, next_marker })
    }

    async fn get_hosted_zone(&self, zone_id: &str) -> Result<HostedZone> {
        self.calls
            .lock()
            .await
            .push(MockCall::GetHostedZone(zone_id.to_string()));

        if let Some(err) = &self.get_zone_error {
            return Err(err.clone());
        }

        self.zone_pages
            .iter()
            .flatten()
            .find(|z| z.id == zone_id)
            .cloned()
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone: zone_id.to_string(),
                raw_message: None,
            })
    }

    async fn list_records(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<RecordPage> {
        self.calls.lock().await.push(MockCall::ListRecords {
            zone_id: zone_id.to_string(),
            cursor: cursor.cloned(),
        });

        let index = Self::page_index(cursor);
        if let Some((page, err)) = &self.record_page_error {
            if *page == index {
                return Err(err.clone());
            }
        }

        let records = self.record_pages.get(index).cloned().unwrap_or_default();
        let next = if self.stuck_cursor && index > 0 {
            cursor.cloned()
        } else {
            (index + 1 < self.record_pages.len()).then(|| Self::page_cursor(index + 1))
        };
        Ok(RecordPage { records, next })
    }

    async fn change_records(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let mut calls = self.calls.lock().await;
        let nth = calls
            .iter()
            .filter(|c| matches!(c, MockCall::ChangeRecords { .. }))
            .count();
        calls.push(MockCall::ChangeRecords {
            zone_id: zone_id.to_string(),
            batch: batch.clone(),
        });

        if let Some((fail_at, err)) = &self.change_error {
            if *fail_at == nth {
                return Err(err.clone());
            }
        }

        Ok(ChangeInfo {
            id: format!("/change/C{nth}"),
            status: ChangeStatus::Pending,
            submitted_at: None,
        })
    }
}

// ===== 日志捕获 =====

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records every log line emitted on the current thread.
///
/// `#[tokio::test]` runs on a current-thread runtime, so a test only sees its own lines.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// 安装捕获 logger 并清空当前线程的记录
pub fn capture_logs() {
    // 已安装时返回 Err，忽略
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    CAPTURED.with(|c| c.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<(log::Level, String)> {
    CAPTURED.with(|c| c.borrow().clone())
}

// ===== 工厂方法 =====

pub fn create_test_context(provider: Arc<MockDnsProvider>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(provider))
}

pub fn test_zone() -> HostedZone {
    HostedZone {
        id: TEST_ZONE_ID.to_string(),
        name: "example.com.".to_string(),
        record_count: None,
        private_zone: Some(false),
    }
}

pub fn zone(id: &str, name: &str) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
        record_count: None,
        private_zone: None,
    }
}

/// `A` alias record pointing at `dns_name`.
pub fn alias_record(name: &str, dns_name: &str) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        record_type: RecordType::A,
        alias_target: Some(AliasTarget {
            hosted_zone_id: TARGET_ZONE_ID.to_string(),
            dns_name: dns_name.to_string(),
            evaluate_target_health: false,
        }),
    }
}

/// Non-alias record of the given type.
pub fn plain_record(name: &str, record_type: RecordType) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        record_type,
        alias_target: None,
    }
}

/// `count` alias records `host-<i>.example.com.` pointing at [`OLD_LB`].
pub fn numbered_alias_records(count: usize) -> Vec<ResourceRecord> {
    (0..count)
        .map(|i| alias_record(&format!("host-{i}.example.com."), OLD_LB))
        .collect()
}

pub fn throttled() -> ProviderError {
    ProviderError::RateLimited {
        provider: "mock".to_string(),
        raw_message: Some("Rate exceeded".to_string()),
    }
}
