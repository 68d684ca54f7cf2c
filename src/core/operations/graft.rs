//! Grafting repositories from one connection onto another.
//!
//! A graft copies every repo URL recorded under a source connection in a
//! snapshot file to a live target connection, then re-reads the live
//! registry to confirm the target now contains everything that was copied.
//!
//! The whole operation is a strict sequence with fail-stop semantics: the
//! first failing step aborts the run, and there is no rollback of URLs that
//! were already attached. Operators re-run or reconcile manually.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::api::ConnectionsClient;
use crate::error::GraftError;
use crate::snapshot;

/// Inputs of one graft run.
#[derive(Debug, Clone)]
pub struct GraftRequest {
    /// Snapshot file recording the source connection's repo URLs.
    pub snapshot_path: PathBuf,
    /// Connection id to copy from, as recorded in the snapshot.
    pub source_id: String,
    /// Connection id to copy to.
    pub target_id: String,
}

/// Result of a successful graft: what landed where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraftOutcome {
    /// The target connection.
    pub target_id: String,
    /// Repo URLs copied and verified, in attempt order.
    pub copied: Vec<String>,
}

/// Graft operation over a [`ConnectionsClient`].
pub struct GraftOperation {
    client: ConnectionsClient,
}

impl GraftOperation {
    /// Creates a new graft operation.
    pub fn new(client: ConnectionsClient) -> Self {
        Self { client }
    }

    /// Runs the graft end to end.
    ///
    /// Order of phases:
    /// 1. Preconditions, before any I/O: distinct ids, then a readable and
    ///    parseable snapshot.
    /// 2. Resolve the source entry (first id match wins). A missing source
    ///    fails before any mutating call is issued.
    /// 3. Copy phase: attach each URL to the target in snapshot order,
    ///    aborting on the first failure.
    /// 4. Verification phase: re-read the live registry and confirm every
    ///    copied URL is present on the target by exact string match. The
    ///    remote's attach response does not guarantee the mutation is
    ///    visible on a subsequent read, so a silent inconsistency becomes
    ///    an explicit failure here.
    #[instrument(skip(self, request), fields(from = %request.source_id, to = %request.target_id))]
    pub async fn run(&self, request: &GraftRequest) -> Result<GraftOutcome, GraftError> {
        if request.source_id == request.target_id {
            return Err(GraftError::SameConnection {
                connection_id: request.source_id.clone(),
            });
        }

        let entries = snapshot::parse_snapshot(&request.snapshot_path)?;

        let source = snapshot::find_entry(&entries, &request.source_id).ok_or_else(|| {
            GraftError::SourceNotFound {
                connection_id: request.source_id.clone(),
            }
        })?;

        info!(
            urls = source.repo_urls.len(),
            "copying repos from snapshot entry"
        );

        let mut copied = Vec::with_capacity(source.repo_urls.len());
        for repo_url in &source.repo_urls {
            self.client.attach_repo(repo_url, &request.target_id).await?;
            copied.push(repo_url.clone());
        }

        // Verify against a fresh registry read, not the snapshot.
        let live = self.client.list_connections().await?;
        let target = live
            .into_iter()
            .find(|connection| connection.id == request.target_id)
            .ok_or_else(|| GraftError::TargetNotFound {
                connection_id: request.target_id.clone(),
            })?;

        for repo_url in &copied {
            if !target.contains_repo(repo_url) {
                return Err(GraftError::Verification {
                    repo_url: repo_url.clone(),
                    connection_id: request.target_id.clone(),
                });
            }
        }

        info!(copied = copied.len(), "graft verified");

        Ok(GraftOutcome {
            target_id: request.target_id.clone(),
            copied,
        })
    }
}
