//! Settings: command line merged over an optional TOML file

use std::path::{Path, PathBuf};

use alias_prune_core::{CleanupRequest, RestoreRequest};
use alias_prune_provider::ProviderCredentials;
use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};

/// Defaults read from `--config <FILE>`.
///
/// ```toml
/// hosted_zone = "example.com"
/// target_alias = "old-lb-123.us-east-1.elb.amazonaws.com"
/// keep_list = ["www", "*.internal"]
/// region = "us-east-1"
/// profile = "dns-admin"
/// snapshot_dir = "/var/backups/alias-prune"
/// log_dir = "/var/log/alias-prune"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub hosted_zone: Option<String>,
    pub target_alias: Option<String>,
    pub keep_list: Vec<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub snapshot_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Which workflow this invocation runs.
#[derive(Debug, Clone)]
pub enum Mode {
    Cleanup(CleanupRequest),
    Restore(RestoreRequest),
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub credentials: ProviderCredentials,
    pub output: OutputFormat,
}

/// Rolling log directory: `--log-dir`, then the config file, then `.`.
pub fn log_dir(cli: &Cli, file: &FileConfig) -> PathBuf {
    cli.log_dir
        .clone()
        .or_else(|| file.log_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Settings {
    /// Merge command line over file defaults and validate.
    ///
    /// Every error here is a configuration error raised before any provider call.
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self> {
        let credentials = resolve_credentials(&cli, &file)?;

        let Some(hosted_zone) = non_empty(cli.hosted_zone).or_else(|| non_empty(file.hosted_zone))
        else {
            bail!("Must provide a hosted zone (--hosted-zone or ALIAS_PRUNE_HOSTED_ZONE)");
        };

        let mode = if let Some(snapshot_path) = cli.restore {
            Mode::Restore(RestoreRequest {
                hosted_zone,
                snapshot_path,
            })
        } else {
            let Some(target_alias) =
                non_empty(cli.target_alias).or_else(|| non_empty(file.target_alias))
            else {
                bail!("Must provide a target alias (--target-alias or ALIAS_PRUNE_TARGET_ALIAS)");
            };
            let keep_list = if cli.keep_list.is_empty() {
                file.keep_list
            } else {
                cli.keep_list
            };
            Mode::Cleanup(CleanupRequest {
                hosted_zone,
                target_alias,
                keep_list,
                dry_run: cli.dryrun,
                snapshot_dir: cli.snapshot_dir.or(file.snapshot_dir),
            })
        };

        Ok(Self {
            mode,
            credentials,
            output: cli.output,
        })
    }
}

/// Static keys win over a profile; a half-specified key pair is an error.
fn resolve_credentials(cli: &Cli, file: &FileConfig) -> Result<ProviderCredentials> {
    let region = non_empty(cli.region.clone()).or_else(|| non_empty(file.region.clone()));
    let access_key_id = non_empty(cli.aws_access_key_id.clone());
    let secret_access_key = non_empty(cli.aws_secret_access_key.clone());

    match (access_key_id, secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Ok(ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
            session_token: non_empty(cli.aws_session_token.clone()),
            region,
        }),
        (Some(_), None) => bail!(
            "AWS Secret Access Key not set - cannot continue. \
             Set AWS_SECRET_ACCESS_KEY or pass --aws-secret-access-key"
        ),
        (None, Some(_)) => bail!(
            "AWS Access Key Id not set - cannot continue. \
             Set AWS_ACCESS_KEY_ID or pass --aws-access-key-id"
        ),
        (None, None) => {
            match non_empty(cli.profile.clone()).or_else(|| non_empty(file.profile.clone())) {
                Some(profile_name) => Ok(ProviderCredentials::Route53Profile {
                    profile_name,
                    region,
                }),
                None => bail!(
                    "AWS credentials not set - cannot continue. \
                     Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, or choose a --profile"
                ),
            }
        }
    }
}

/// Which kind of credentials was chosen; never includes key material.
pub fn describe_credentials(credentials: &ProviderCredentials) -> String {
    match credentials {
        ProviderCredentials::Route53 { region, .. } => format!(
            "static access keys (region {})",
            region.as_deref().unwrap_or("default")
        ),
        ProviderCredentials::Route53Profile {
            profile_name,
            region,
        } => format!(
            "profile '{profile_name}' (region {})",
            region.as_deref().unwrap_or("default")
        ),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
