//! GitHub-connections client implementation.
//!
//! This module composes the raw endpoint operations into the two API-facing
//! behaviors the tool is built on: reading the connection registry and
//! attaching a repository to a connection.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, instrument};

use super::credential::BasicCredential;
use super::mappers::{decode_connection_repos, decode_connections};
use super::traits::{ConnectionOperations, RealConnectionOperations};
use crate::error::ApiError;
use crate::models::{AttachReceipt, Connection};

/// Client for the GitHub-connections endpoints of one Azure DevOps project.
///
/// The credential is injected once at construction; no call reads the
/// process environment. Cloned handles share the underlying operations.
///
/// # Example
///
/// ```rust,no_run
/// use artado::api::ConnectionsClient;
/// use secrecy::SecretString;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ConnectionsClient::new(
///     "my-org".to_string(),
///     "my-project".to_string(),
///     "user@example.com".to_string(),
///     SecretString::from("my-pat".to_string()),
/// )?;
///
/// let connections = client.list_connections().await?;
/// println!("Found {} connections", connections.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConnectionsClient {
    organization: String,
    project: String,
    ops: Arc<dyn ConnectionOperations>,
}

impl ConnectionsClient {
    /// Creates a client backed by the real HTTP implementation.
    pub fn new(
        organization: String,
        project: String,
        username: String,
        pat: SecretString,
    ) -> Result<Self, ApiError> {
        let credential = BasicCredential::new(username, pat);
        let ops = Arc::new(RealConnectionOperations::new(
            &organization,
            &project,
            credential,
        )?);
        Ok(Self {
            organization,
            project,
            ops,
        })
    }

    /// Creates a client over explicit operations.
    ///
    /// This is the seam tests use to substitute mock operations.
    pub fn with_operations(
        organization: String,
        project: String,
        ops: Arc<dyn ConnectionOperations>,
    ) -> Self {
        Self {
            organization,
            project,
            ops,
        }
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the project name.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Reads the full connection registry.
    ///
    /// Fetches the connections collection, then each connection's repos
    /// collection one at a time, enriching the record with the display name
    /// and the remote-ordered repo URL list. An empty collection yields an
    /// empty Vec.
    ///
    /// The per-connection loop is deliberately fail-stop: a transport or
    /// decoding failure on any single connection aborts the whole listing
    /// rather than silently dropping that connection from the result.
    #[instrument(skip(self), fields(project = %self.project))]
    pub async fn list_connections(&self) -> Result<Vec<Connection>, ApiError> {
        let body = self.ops.get_connections().await?;
        let decoded = decode_connections(&body)?;
        debug!(count = decoded.value.len(), "fetched connections collection");

        let mut connections = Vec::with_capacity(decoded.value.len());
        for wire in decoded.value {
            let repos_body = self.ops.get_connection_repos(&wire.id).await?;
            let repos = decode_connection_repos(&repos_body)?;

            // The repos endpoint is the authoritative source for the display
            // name; the collection-level name fills in when it is absent.
            let name = repos.name.or(wire.name).unwrap_or_default();
            let repo_urls: Vec<String> = repos
                .value
                .into_iter()
                .map(|r| r.git_hub_repository_url)
                .collect();

            debug!(
                connection_id = %wire.id,
                repos = repo_urls.len(),
                "enriched connection"
            );

            connections.push(Connection {
                id: wire.id,
                name,
                authorization_type: wire.authorization_type,
                is_connection_valid: wire.is_connection_valid,
                repo_urls,
            });
        }

        Ok(connections)
    }

    /// Attaches one repository URL to a connection.
    ///
    /// An empty URL is rejected before any network call. The remote's HTTP
    /// status decides the outcome: 200 yields a receipt, anything else an
    /// [`ApiError::AttachFailed`]. Re-attaching an already-attached URL is
    /// governed by the remote's semantics and not guarded here.
    #[instrument(skip(self))]
    pub async fn attach_repo(
        &self,
        repo_url: &str,
        connection_id: &str,
    ) -> Result<AttachReceipt, ApiError> {
        if repo_url.is_empty() {
            return Err(ApiError::EmptyRepoUrl);
        }

        let status = self.ops.add_repo(connection_id, repo_url).await?;
        if status == 200 {
            debug!(connection_id, repo_url, "repo attached");
            Ok(AttachReceipt {
                connection_id: connection_id.to_string(),
                repo_url: repo_url.to_string(),
            })
        } else {
            Err(ApiError::AttachFailed {
                repo_url: repo_url.to_string(),
                connection_id: connection_id.to_string(),
                status,
            })
        }
    }
}
