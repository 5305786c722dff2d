//! Logging setup
//!
//! Console on stderr (`LEVEL: message`), plus a daily rolling file that
//! always records DEBUG. Library crates log through `log`; those records are
//! bridged into `tracing` when the subscriber is installed.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "alias-prune";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 5;

/// SDK internals are chatty at DEBUG; keep them at WARN.
const QUIET_TARGETS: &[&str] = &[
    "aws_config=warn",
    "aws_smithy_runtime=warn",
    "aws_smithy_runtime_api=warn",
    "aws_sdk_route53=warn",
    "hyper=warn",
    "hyper_util=warn",
    "rustls=warn",
    "h2=warn",
];

/// Console format: right-aligned level, colon, message.
struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{:>8}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn filter(default_level: LevelFilter) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    for target in QUIET_TARGETS {
        filter = filter.add_directive(target.parse().context("invalid log directive")?);
    }
    Ok(filter)
}

/// 初始化日志
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of `main`.
pub fn init(verbose: bool, log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .with_context(|| format!("failed to open log file in {}", log_dir.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .event_format(LevelPrefix)
        .with_filter(filter(console_level)?);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter(LevelFilter::DEBUG)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    if verbose {
        tracing::debug!("Verbose logging selected");
    }
    Ok(guard)
}
