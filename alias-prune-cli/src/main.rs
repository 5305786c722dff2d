//! alias-prune entry point
//!
//! Deletes stale alias records from one hosted zone after snapshotting them,
//! or replays a snapshot with `--restore <FILE>`.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use alias_prune_core::{
    CleanupReport, CleanupService, CoreError, RestoreReport, RestoreService, ServiceContext,
};
use alias_prune_provider::{ProviderError, create_provider};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, OutputFormat};
use config::{FileConfig, Mode, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 日志尚未初始化，配置文件错误直接打印到 stderr
    let file_config = match cli.config.as_deref().map(FileConfig::load).transpose() {
        Ok(file) => file.unwrap_or_default(),
        Err(e) => {
            eprintln!("CRITICAL: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match logging::init(cli.verbose, &config::log_dir(&cli, &file_config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("CRITICAL: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("INIT");

    match run_app(cli, file_config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let expected = e
                .downcast_ref::<CoreError>()
                .map(CoreError::is_expected)
                .or_else(|| e.downcast_ref::<ProviderError>().map(ProviderError::is_expected))
                .unwrap_or(false);
            if expected {
                tracing::warn!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run_app(cli: Cli, file_config: FileConfig) -> Result<()> {
    let settings = Settings::resolve(cli, file_config)?;
    tracing::debug!(
        "Credentials: {}",
        config::describe_credentials(&settings.credentials)
    );

    let provider = create_provider(settings.credentials)
        .await
        .context("failed to configure the Route 53 client")?;
    let ctx = Arc::new(ServiceContext::new(provider));

    match settings.mode {
        Mode::Restore(request) => {
            let report = RestoreService::new(ctx).restore(&request).await?;
            print_report(&report, settings.output, log_restore_report)
        }
        Mode::Cleanup(request) => {
            tracing::info!(
                "Cleaning up Route 53 records in Hosted Zone {} with a target alias of {}",
                request.hosted_zone,
                request.target_alias
            );
            if !request.keep_list.is_empty() {
                tracing::info!(
                    "Adding the following to the keep list: {:?}",
                    request.keep_list
                );
            }
            let report = CleanupService::new(ctx).run(&request).await?;
            print_report(&report, settings.output, log_cleanup_report)
        }
    }
}

fn print_report<T: Serialize>(report: &T, output: OutputFormat, log_text: fn(&T)) -> Result<()> {
    match output {
        OutputFormat::Text => log_text(report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to encode report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn log_cleanup_report(report: &CleanupReport) {
    let skipped = &report.skipped;
    tracing::info!(
        "Zone {} ({}): scanned {}, selected {}, skipped {} (type {}, apex {}, keep list {}, no alias {}, other target {})",
        report.zone_name,
        report.zone_id,
        report.scanned,
        report.candidates,
        skipped.total(),
        skipped.record_type,
        skipped.zone_apex,
        skipped.keep_list,
        skipped.no_alias_target,
        skipped.alias_mismatch
    );
    for change in &report.changes {
        tracing::info!("Change {} submitted ({:?})", change.id, change.status);
    }
    tracing::info!("Snapshot: {}", report.snapshot_path.display());
}

fn log_restore_report(report: &RestoreReport) {
    tracing::info!(
        "Restored {} record(s) into {} ({}) from {}",
        report.restored,
        report.zone_name,
        report.zone_id,
        report.snapshot_path.display()
    );
    for change in &report.changes {
        tracing::info!("Change {} submitted ({:?})", change.id, change.status);
    }
}
