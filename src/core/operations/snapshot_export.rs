//! Connection snapshot export.
//!
//! Reads the live registry once, projects it into snapshot records, and
//! writes a new timestamped YAML file under the snapshot directory. Existing
//! snapshots are never overwritten or appended to.

use std::path::PathBuf;

use tracing::info;

use crate::api::ConnectionsClient;
use crate::error::ArtadoError;
use crate::snapshot::{self, SnapshotEntry};

/// Result of a snapshot export: the written file and its content.
#[derive(Debug, Clone)]
pub struct SnapshotExport {
    /// Path of the snapshot file that was written.
    pub path: PathBuf,
    /// Serialized YAML content, as written.
    pub content: String,
    /// The exported entries.
    pub entries: Vec<SnapshotEntry>,
}

/// Snapshot export operation over a [`ConnectionsClient`].
pub struct SnapshotExportOperation {
    client: ConnectionsClient,
    output_dir: PathBuf,
}

impl SnapshotExportOperation {
    /// Creates an export operation writing under the default directory.
    pub fn new(client: ConnectionsClient) -> Self {
        Self::with_output_dir(client, PathBuf::from(snapshot::SNAPSHOT_DIR))
    }

    /// Creates an export operation writing under an explicit directory.
    pub fn with_output_dir(client: ConnectionsClient, output_dir: PathBuf) -> Self {
        Self { client, output_dir }
    }

    /// Exports the current registry to a new timestamped snapshot file.
    pub async fn run(&self) -> Result<SnapshotExport, ArtadoError> {
        let connections = self.client.list_connections().await?;

        let entries: Vec<SnapshotEntry> = connections
            .iter()
            .map(SnapshotEntry::from_connection)
            .collect();

        let content = snapshot::serialize_entries(&entries)?;
        let file_name = snapshot::snapshot_file_name(&chrono::Local::now());
        let path = snapshot::write_snapshot(&self.output_dir, &file_name, &content)?;

        info!(
            path = %path.display(),
            connections = entries.len(),
            "snapshot exported"
        );

        Ok(SnapshotExport {
            path,
            content,
            entries,
        })
    }
}
