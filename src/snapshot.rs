//! Connection snapshot files.
//!
//! A snapshot is the point-in-time export of all connections and their
//! associated repository URLs, persisted as a YAML sequence of
//! `{id, name, repoUrls}` records. The exporter writes one new file per
//! invocation under a fixed directory; the graft engine reads one back as
//! its source of record. Snapshot files are never mutated in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::models::Connection;

/// Directory snapshots are written under, relative to the working directory.
pub const SNAPSHOT_DIR: &str = "connections";

/// chrono format string for snapshot file timestamps.
///
/// Second granularity; exports are user-triggered, so collisions are not a
/// practical concern.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// One connection's record within a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Connection identifier.
    pub id: String,
    /// Display name at export time.
    pub name: String,
    /// Repository URLs in the order the remote returned them.
    #[serde(rename = "repoUrls")]
    pub repo_urls: Vec<String>,
}

impl SnapshotEntry {
    /// Projects a live connection into its snapshot record.
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            id: connection.id.clone(),
            name: connection.name.clone(),
            repo_urls: connection.repo_urls.clone(),
        }
    }
}

/// Serializes snapshot entries to YAML.
pub fn serialize_entries(entries: &[SnapshotEntry]) -> Result<String, SnapshotError> {
    serde_yml::to_string(entries).map_err(|e| SnapshotError::Serialize {
        message: e.to_string(),
    })
}

/// Reads and parses a snapshot file.
///
/// Read and parse failures are distinguished so the operator can tell a
/// missing file from a malformed one.
pub fn parse_snapshot(path: &Path) -> Result<Vec<SnapshotEntry>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_yml::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Finds the entry for a connection id.
///
/// First match wins; a snapshot with duplicate ids is malformed input and the
/// later entries are ignored.
pub fn find_entry<'a>(entries: &'a [SnapshotEntry], connection_id: &str) -> Option<&'a SnapshotEntry> {
    entries.iter().find(|entry| entry.id == connection_id)
}

/// Returns the file name for a snapshot taken at the given local time.
pub fn snapshot_file_name(timestamp: &chrono::DateTime<chrono::Local>) -> String {
    format!("connections-{}.yml", timestamp.format(TIMESTAMP_FORMAT))
}

/// Writes serialized snapshot content to a new file under `dir`.
///
/// Creates the directory if absent. Returns the path of the written file.
pub fn write_snapshot(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, SnapshotError> {
    fs::create_dir_all(dir).map_err(|e| SnapshotError::DirectoryCreation {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|e| SnapshotError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(path)
}
