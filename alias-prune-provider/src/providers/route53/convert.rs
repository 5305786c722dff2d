//! Conversions between SDK shapes and crate types

use aws_sdk_route53::error::BuildError;
use aws_sdk_route53::types as r53;
use chrono::{DateTime, Utc};

use crate::types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone,
    RecordCursor, RecordType, ResourceRecord,
};
use crate::utils::fqdn::ensure_trailing_dot;

pub(crate) fn zone_from_sdk(zone: &r53::HostedZone) -> HostedZone {
    HostedZone {
        id: zone.id().to_string(),
        name: ensure_trailing_dot(zone.name()),
        record_count: zone.resource_record_set_count(),
        private_zone: zone.config().map(r53::HostedZoneConfig::private_zone),
    }
}

pub(crate) fn record_from_sdk(record: &r53::ResourceRecordSet) -> ResourceRecord {
    ResourceRecord {
        name: record.name().to_string(),
        record_type: RecordType::from(record.r#type().as_str()),
        alias_target: record.alias_target().map(|alias| AliasTarget {
            hosted_zone_id: alias.hosted_zone_id().to_string(),
            dns_name: alias.dns_name().to_string(),
            evaluate_target_health: alias.evaluate_target_health(),
        }),
    }
}

/// Assemble the next-page cursor from the listing response fields.
pub(crate) fn cursor_from_sdk(
    name: Option<&str>,
    record_type: Option<&r53::RrType>,
    identifier: Option<&str>,
) -> Option<RecordCursor> {
    name.map(|name| RecordCursor {
        name: name.to_string(),
        record_type: record_type.map(|t| RecordType::from(t.as_str())),
        identifier: identifier.map(str::to_string),
    })
}

/// Minimal record descriptor: name, type and alias target only.
pub(crate) fn record_to_sdk(
    record: &ResourceRecord,
) -> Result<r53::ResourceRecordSet, BuildError> {
    let mut builder = r53::ResourceRecordSet::builder()
        .name(&record.name)
        .r#type(r53::RrType::from(record.record_type.as_str()));

    if let Some(alias) = &record.alias_target {
        builder = builder.alias_target(
            r53::AliasTarget::builder()
                .hosted_zone_id(&alias.hosted_zone_id)
                .dns_name(&alias.dns_name)
                .evaluate_target_health(alias.evaluate_target_health)
                .build()?,
        );
    }

    builder.build()
}

pub(crate) fn action_to_sdk(action: ChangeAction) -> r53::ChangeAction {
    match action {
        ChangeAction::Delete => r53::ChangeAction::Delete,
        ChangeAction::Upsert => r53::ChangeAction::Upsert,
    }
}

fn change_to_sdk(change: &Change) -> Result<r53::Change, BuildError> {
    r53::Change::builder()
        .action(action_to_sdk(change.action))
        .resource_record_set(record_to_sdk(&change.record)?)
        .build()
}

pub(crate) fn batch_to_sdk(batch: &ChangeBatch) -> Result<r53::ChangeBatch, BuildError> {
    let changes = batch
        .changes
        .iter()
        .map(change_to_sdk)
        .collect::<Result<Vec<_>, _>>()?;

    r53::ChangeBatch::builder()
        .comment(&batch.comment)
        .set_changes(Some(changes))
        .build()
}

pub(crate) fn change_info_from_sdk(info: &r53::ChangeInfo) -> ChangeInfo {
    let status = match info.status() {
        r53::ChangeStatus::Pending => ChangeStatus::Pending,
        r53::ChangeStatus::Insync => ChangeStatus::InSync,
        _ => ChangeStatus::Unknown,
    };
    let submitted = info.submitted_at();

    ChangeInfo {
        id: info.id().to_string(),
        status,
        submitted_at: DateTime::<Utc>::from_timestamp(submitted.secs(), submitted.subsec_nanos()),
    }
}
