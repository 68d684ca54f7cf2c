//! Bulk repository attachment from a text file.
//!
//! Reads a newline-delimited list of repository URLs and attaches each one to
//! a connection. Attempts are independent: a failing line does not stop the
//! run, and lines before and after a failure are still attached. The overall
//! result therefore carries both the receipts and the failures.

use std::path::Path;

use tracing::{info, warn};

use crate::api::ConnectionsClient;
use crate::error::BulkAttachError;
use crate::models::AttachReceipt;

/// Result of a bulk attach run.
#[derive(Debug, Clone, Default)]
pub struct BulkAttachOutcome {
    /// Receipts for every URL that attached, in file order.
    pub succeeded: Vec<AttachReceipt>,
    /// URLs whose attach attempt failed, in file order.
    pub failed: Vec<String>,
}

impl BulkAttachOutcome {
    /// Returns the aggregate error when any line failed.
    ///
    /// The run is not atomic, so callers should consume the succeeded list
    /// even when this returns an error.
    pub fn failure(&self) -> Option<BulkAttachError> {
        if self.failed.is_empty() {
            None
        } else {
            Some(BulkAttachError::SomeAttachesFailed {
                failed: self.failed.clone(),
            })
        }
    }
}

/// Reads the repository URL list from a text file.
///
/// One URL per line; blank lines are skipped. Fails fast when the file is
/// missing, unreadable, or contains zero non-blank lines.
pub fn read_repo_list(path: &Path) -> Result<Vec<String>, BulkAttachError> {
    let content = std::fs::read_to_string(path).map_err(|e| BulkAttachError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let repos: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if repos.is_empty() {
        return Err(BulkAttachError::FileEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(repos)
}

/// Bulk attach operation over a [`ConnectionsClient`].
pub struct BulkAttachOperation {
    client: ConnectionsClient,
}

impl BulkAttachOperation {
    /// Creates a new bulk attach operation.
    pub fn new(client: ConnectionsClient) -> Self {
        Self { client }
    }

    /// Attaches every URL in the list to the connection, one at a time.
    ///
    /// Never aborts on an individual failure; the outcome accumulates both
    /// receipts and failed URLs.
    pub async fn attach_all(&self, repos: &[String], connection_id: &str) -> BulkAttachOutcome {
        let mut outcome = BulkAttachOutcome::default();

        for repo_url in repos {
            match self.client.attach_repo(repo_url, connection_id).await {
                Ok(receipt) => outcome.succeeded.push(receipt),
                Err(e) => {
                    warn!(repo_url, connection_id, error = %e, "attach failed");
                    outcome.failed.push(repo_url.clone());
                }
            }
        }

        info!(
            connection_id,
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "bulk attach finished"
        );

        outcome
    }

    /// Reads the file and attaches every listed URL.
    pub async fn run(
        &self,
        path: &Path,
        connection_id: &str,
    ) -> Result<BulkAttachOutcome, BulkAttachError> {
        let repos = read_repo_list(path)?;
        Ok(self.attach_all(&repos, connection_id).await)
    }
}
