//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary as log lines
    #[default]
    Text,
    /// Report as a JSON document on stdout
    Json,
}

/// Cleanup old Route 53 alias records
#[derive(Parser, Debug, Default)]
#[command(
    name = "alias-prune",
    version,
    about = "Cleanup old Route 53 alias records",
    long_about = "Cleanup old Route 53 alias records.\n\n\
        Deletes A alias records in a hosted zone whose alias target matches --target-alias, \
        after writing them to a snapshot file. Use --restore <FILE> to recreate them.\n\n\
        Credentials come from --aws-access-key-id/--aws-secret-access-key \
        (or AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY), or from a named --profile."
)]
pub struct Cli {
    /// Hosted zone name
    #[arg(long, env = "ALIAS_PRUNE_HOSTED_ZONE", value_name = "NAME")]
    pub hosted_zone: Option<String>,

    /// Alias DNS name whose records are deleted
    #[arg(long, env = "ALIAS_PRUNE_TARGET_ALIAS", value_name = "NAME")]
    pub target_alias: Option<String>,

    /// Record names (relative to the zone) that are never deleted; `*` allowed
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub keep_list: Vec<String>,

    /// Restore records from a snapshot written by a previous run
    #[arg(long, value_name = "FILE", conflicts_with = "dryrun")]
    pub restore: Option<PathBuf>,

    /// Do a dry run - write the snapshot, delete nothing
    #[arg(long)]
    pub dryrun: bool,

    /// Turn on DEBUG logging on the console
    #[arg(long)]
    pub verbose: bool,

    /// AWS Access Key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub aws_access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,

    /// AWS Session Token (temporary credentials)
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region [default: us-east-1]
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// TOML file with default settings
    #[arg(long, env = "ALIAS_PRUNE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for the snapshot file [default: system temp dir]
    #[arg(long, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,

    /// Directory for the rolling log file [default: .]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn keep_list_takes_multiple_values() {
        let cli = Cli::try_parse_from([
            "alias-prune",
            "--keep-list",
            "www",
            "*.dev",
            "--dryrun",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.keep_list, vec!["www".to_string(), "*.dev".to_string()]);
        assert!(cli.dryrun);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn restore_conflicts_with_dryrun() {
        let result = Cli::try_parse_from(["alias-prune", "--restore", "x.yaml", "--dryrun"]);
        assert!(result.is_err());
    }
}
