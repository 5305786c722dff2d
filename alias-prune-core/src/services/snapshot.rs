//! 快照读写
//!
//! A snapshot is the ordered list of records selected for deletion, written
//! before any delete call so a later run can restore them.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use alias_prune_provider::ResourceRecord;
use tempfile::Builder as TempFileBuilder;

use crate::error::{CoreError, CoreResult};

/// Suffix appended to the temporary file name when the snapshot is committed.
pub const SNAPSHOT_SUFFIX: &str = ".yaml";

const SNAPSHOT_PREFIX: &str = "alias-prune-";

/// 写入快照文件
///
/// The records are serialized as YAML into a uniquely named temporary file in
/// `dir` (system temp dir when `None`), flushed and synced, then renamed to the
/// same name plus [`SNAPSHOT_SUFFIX`]. Any failure before the rename removes
/// the temporary file.
pub fn write_snapshot(records: &[ResourceRecord], dir: Option<&Path>) -> CoreResult<PathBuf> {
    let dir = dir.map_or_else(std::env::temp_dir, Path::to_path_buf);

    let body = serde_yaml::to_string(records).map_err(|e| CoreError::SnapshotFormat {
        path: dir.clone(),
        detail: e.to_string(),
    })?;

    let mut file = TempFileBuilder::new()
        .prefix(SNAPSHOT_PREFIX)
        .tempfile_in(&dir)
        .map_err(|e| CoreError::SnapshotIo {
            path: dir.clone(),
            source: e,
        })?;

    let io_err = |path: &Path, source: std::io::Error| CoreError::SnapshotIo {
        path: path.to_path_buf(),
        source,
    };

    file.write_all(body.as_bytes())
        .map_err(|e| io_err(file.path(), e))?;
    file.flush().map_err(|e| io_err(file.path(), e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| io_err(file.path(), e))?;

    let mut final_name = OsString::from(file.path().as_os_str());
    final_name.push(SNAPSHOT_SUFFIX);
    let final_path = PathBuf::from(final_name);

    // 失败时 PersistError 携带的临时文件在 drop 时删除
    file.persist_noclobber(&final_path)
        .map_err(|e| io_err(&final_path, e.error))?;

    log::debug!(
        "Wrote {} record(s) to snapshot {}",
        records.len(),
        final_path.display()
    );
    Ok(final_path)
}

/// 读取快照文件
///
/// `.json` files are parsed as JSON, everything else as YAML. Only `Name`,
/// `Type` and `AliasTarget` are read; other fields are ignored.
pub fn read_snapshot(path: &Path) -> CoreResult<Vec<ResourceRecord>> {
    if !path.is_file() {
        return Err(CoreError::RestoreFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| CoreError::SnapshotIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records: Vec<ResourceRecord> = if is_json {
        serde_json::from_str(&content).map_err(|e| CoreError::SnapshotFormat {
            path: path.to_path_buf(),
            detail: format!("Failed to parse JSON snapshot: {e}"),
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| CoreError::SnapshotFormat {
            path: path.to_path_buf(),
            detail: format!("Failed to parse YAML snapshot: {e}"),
        })?
    };

    log::debug!(
        "Read {} record(s) from snapshot {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
