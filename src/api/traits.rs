//! Traits for GitHub-connections API operations.
//!
//! These traits abstract the raw endpoint operations to enable:
//! - Mocking for unit tests
//! - Alternative implementations
//! - Easier testing of async code
//!
//! Implementations return raw response bodies; decoding happens in the
//! caller against the schemas in [`crate::api::mappers`].

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::credential::BasicCredential;
use crate::error::ApiError;

/// Root of the Azure DevOps REST endpoint family.
pub const API_ROOT: &str = "https://dev.azure.com/";

/// API version pinned for every githubconnections request.
pub const API_VERSION_QUERY: &str = "api-version=7.1-preview";

/// Trait for raw GitHub-connections endpoint operations.
///
/// This trait abstracts the three endpoint calls the tool issues, allowing
/// for both real and mock implementations. Bodies come back undecoded so the
/// composing client owns schema validation.
#[async_trait]
pub trait ConnectionOperations: Send + Sync {
    /// Fetches the connections collection for the configured project.
    ///
    /// Returns the raw response body on a success status.
    async fn get_connections(&self) -> Result<String, ApiError>;

    /// Fetches the connected-repositories collection for one connection.
    ///
    /// Returns the raw response body on a success status.
    async fn get_connection_repos(&self, connection_id: &str) -> Result<String, ApiError>;

    /// Issues the add-repository mutation for one URL.
    ///
    /// Returns the HTTP status code; the caller interprets anything other
    /// than 200 as a failed attach.
    async fn add_repo(&self, connection_id: &str, repo_url: &str) -> Result<u16, ApiError>;
}

/// Real implementation backed by `reqwest`.
///
/// One client instance serves a single organization/project scope with a
/// single injected credential; nothing is read from the environment per call.
pub struct RealConnectionOperations {
    http: reqwest::Client,
    base: Url,
    credential: BasicCredential,
}

impl RealConnectionOperations {
    /// Creates a client scoped to one organization and project.
    ///
    /// The underlying HTTP client carries a bounded per-request timeout so a
    /// stalled remote cannot hang an operation indefinitely.
    pub fn new(
        organization: &str,
        project: &str,
        credential: BasicCredential,
    ) -> Result<Self, ApiError> {
        let base = Url::parse(API_ROOT)
            .and_then(|u| u.join(&format!("{organization}/{project}/_apis/")))
            .map_err(|e| ApiError::Transport {
                message: format!("invalid endpoint base: {e}"),
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("artado/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base,
            credential,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base.join(path).map_err(|e| ApiError::Transport {
            message: format!("invalid endpoint path {path}: {e}"),
        })?;
        url.set_query(Some(API_VERSION_QUERY));
        Ok(url)
    }

    async fn get_body(&self, url: Url) -> Result<String, ApiError> {
        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::AUTHORIZATION, self.credential.authorization_header())
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                message: format!("request to {url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| ApiError::Transport {
            message: format!("failed to read response body from {url}: {e}"),
        })
    }
}

#[async_trait]
impl ConnectionOperations for RealConnectionOperations {
    async fn get_connections(&self) -> Result<String, ApiError> {
        let url = self.endpoint("githubconnections")?;
        self.get_body(url).await
    }

    async fn get_connection_repos(&self, connection_id: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&format!("githubconnections/{connection_id}/repos"))?;
        self.get_body(url).await
    }

    async fn add_repo(&self, connection_id: &str, repo_url: &str) -> Result<u16, ApiError> {
        let url = self.endpoint(&format!("githubconnections/{connection_id}/repos"))?;
        let body = super::mappers::AddReposRequest::single(repo_url);

        let response = self
            .http
            .post(url.clone())
            .header(reqwest::header::AUTHORIZATION, self.credential.authorization_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                message: format!("request to {url} failed: {e}"),
            })?;

        Ok(response.status().as_u16())
    }
}
