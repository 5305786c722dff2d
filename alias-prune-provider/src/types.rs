use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Hosted Zones ============

/// A hosted zone as reported by the provider.
///
/// `name` is always fully qualified (ends with a trailing dot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Provider-assigned zone identifier (e.g. `/hostedzone/Z1D633PJN98FT9`).
    pub id: String,
    /// Fully-qualified zone name.
    pub name: String,
    /// Number of resource record sets in the zone, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<i64>,
    /// Whether the zone is private (VPC-scoped), if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_zone: Option<bool>,
}

/// One page of the account's hosted zone list.
#[derive(Debug, Clone, Default)]
pub struct ZonePage {
    /// Zones in this page.
    pub zones: Vec<HostedZone>,
    /// Marker for the next page; `None` when this is the last page.
    pub next_marker: Option<String>,
}

// ============ Record Types ============

/// DNS record type.
///
/// Types the provider may return but this crate has no variant for are kept
/// verbatim in [`RecordType::Other`], so listing never fails on an unfamiliar type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Srv,
    Txt,
    Caa,
    Other(String),
}

impl RecordType {
    /// Upper-case wire representation (`"A"`, `"AAAA"`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Caa => "CAA",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "PTR" => Self::Ptr,
            "SOA" => Self::Soa,
            "SRV" => Self::Srv,
            "TXT" => Self::Txt,
            "CAA" => Self::Caa,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Resource Records ============

/// Alias target of a resource record.
///
/// Field names follow the provider's native listing format so a snapshot
/// written by this crate and one dumped from the provider API read the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    /// Hosted zone id of the alias *target* (e.g. the load balancer's canonical zone).
    #[serde(rename = "HostedZoneId")]
    pub hosted_zone_id: String,
    /// Fully-qualified DNS name of the alias target.
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    /// Whether the provider evaluates the target's health.
    #[serde(rename = "EvaluateTargetHealth")]
    pub evaluate_target_health: bool,
}

/// A resource record set as listed from a zone.
///
/// Only the fields the cleanup workflow needs are modelled. Unknown fields
/// (`TTL`, `ResourceRecords`, `SetIdentifier`, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Fully-qualified record name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Record type.
    #[serde(rename = "Type")]
    pub record_type: RecordType,
    /// Alias target, for alias records.
    #[serde(rename = "AliasTarget", default, skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
}

/// Pagination cursor for record listing.
///
/// Built from the provider's "next record" response fields and handed back
/// verbatim on the following call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCursor {
    /// Name of the first record on the next page.
    pub name: String,
    /// Type of the first record on the next page, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    /// Set identifier of the first record on the next page, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// One page of records from a zone.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    /// Records in this page, in provider order.
    pub records: Vec<ResourceRecord>,
    /// Cursor for the next page; `None` when the provider reports no more pages.
    pub next: Option<RecordCursor>,
}

// ============ Change Batches ============

/// Action applied to one record in a change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Delete,
    Upsert,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Upsert => "UPSERT",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One change entry: an action plus the record it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "Action")]
    pub action: ChangeAction,
    #[serde(rename = "ResourceRecordSet")]
    pub record: ResourceRecord,
}

/// A provider unit of work: changes applied together, atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "Changes")]
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Build a batch applying the same `action` to every record.
    pub fn uniform(action: ChangeAction, records: &[ResourceRecord], comment: &str) -> Self {
        Self {
            comment: comment.to_string(),
            changes: records
                .iter()
                .map(|record| Change {
                    action,
                    record: record.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Propagation status of a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Accepted, not yet propagated to all name servers.
    Pending,
    /// Propagated.
    InSync,
    /// A status this crate does not recognize.
    Unknown,
}

/// Provider receipt for an accepted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Provider change id, usable to poll for completion.
    pub id: String,
    /// Status at submission time.
    pub status: ChangeStatus,
    /// Submission timestamp, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

// ============ Credentials ============

/// Credentials used to construct a provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials", rename_all = "camelCase")]
pub enum ProviderCredentials {
    /// Route 53 with a static access key pair.
    #[serde(rename_all = "camelCase")]
    Route53 {
        access_key_id: String,
        secret_access_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_token: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
    /// Route 53 with a named profile from the shared AWS config files.
    #[serde(rename_all = "camelCase")]
    Route53Profile {
        profile_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
}

impl ProviderCredentials {
    /// Check that required fields are present and non-empty.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        match self {
            Self::Route53 {
                access_key_id,
                secret_access_key,
                ..
            } => {
                if access_key_id.trim().is_empty() {
                    return Err("access_key_id");
                }
                if secret_access_key.trim().is_empty() {
                    return Err("secret_access_key");
                }
                Ok(())
            }
            Self::Route53Profile { profile_name, .. } => {
                if profile_name.trim().is_empty() {
                    return Err("profile_name");
                }
                Ok(())
            }
        }
    }

    /// Region override, if any.
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Route53 { region, .. } | Self::Route53Profile { region, .. } => {
                region.as_deref()
            }
        }
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route53 {
                access_key_id,
                session_token,
                region,
                ..
            } => f
                .debug_struct("Route53")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .field("session_token", &session_token.as_ref().map(|_| "<redacted>"))
                .field("region", region)
                .finish(),
            Self::Route53Profile {
                profile_name,
                region,
            } => f
                .debug_struct("Route53Profile")
                .field("profile_name", profile_name)
                .field("region", region)
                .finish(),
        }
    }
}
