//! 类型定义模块

mod cleanup;
mod keep_list;

pub use cleanup::{
    CleanupReport, CleanupRequest, FilterDecision, RestoreReport, RestoreRequest, SkipCounts,
    SkipReason,
};
pub use keep_list::KeepList;

// Re-export provider 库的公共类型
pub use alias_prune_provider::{
    AliasTarget, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, RecordType,
    ResourceRecord,
};
