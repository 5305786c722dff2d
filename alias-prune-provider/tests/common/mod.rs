//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use alias_prune_provider::{DnsProvider, ProviderCredentials, ensure_trailing_dot, create_provider};

/// 缺少任一环境变量时跳过（live 测试）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        if let Some(missing) = [$($var),+].into_iter().find(|v| std::env::var(v).is_err()) {
            eprintln!("跳过测试: 缺少环境变量 {missing}");
            return;
        }
    };
}

/// 解包 `Some`，否则带消息失败
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let Some(val) = $expr else {
            panic!($($msg)+);
        };
        val
    }};
}

/// 解包 `Ok`，否则带消息和错误失败
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("{}: {e:?}", format_args!($($msg)+)),
        }
    }};
}

/// 测试上下文 - 封装 Provider 和测试托管区域
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    /// 托管区域名称（带结尾点）
    pub zone_name: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    /// 创建 Route 53 测试上下文
    pub async fn route53() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let zone_name = env::var("TEST_HOSTED_ZONE").ok()?;

        let credentials = ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
            session_token: env::var("AWS_SESSION_TOKEN").ok(),
            region: env::var("AWS_REGION").ok(),
        };
        let provider = create_provider(credentials).await.ok()?;

        Some(Self {
            provider,
            zone_name: ensure_trailing_dot(&zone_name),
            zone_id: None,
        })
    }

    /// 查找测试托管区域的 `zone_id`（逐页扫描）
    pub async fn find_zone_id(&mut self) -> Option<String> {
        if self.zone_id.is_some() {
            return self.zone_id.clone();
        }

        let mut marker: Option<String> = None;
        loop {
            let page = self.provider.list_hosted_zones(marker.as_deref()).await.ok()?;
            if let Some(zone) = page.zones.iter().find(|z| z.name == self.zone_name) {
                self.zone_id = Some(zone.id.clone());
                return self.zone_id.clone();
            }
            marker = Some(page.next_marker?);
        }
    }
}
