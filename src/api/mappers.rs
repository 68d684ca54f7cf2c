//! Wire schemas and decoders for GitHub-connections API responses.
//!
//! Each endpoint gets one explicit serde schema; response bodies are decoded
//! against it rather than probed dynamically. A connection record without an
//! `id` fails decoding instead of defaulting to an empty string, since every
//! downstream operation keys on the id.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// One connection record in the `githubconnections` collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConnection {
    /// Remote-assigned connection identifier. Required.
    pub id: String,
    /// Display name, when the remote includes one at the collection level.
    #[serde(default)]
    pub name: Option<String>,
    /// Authorization scheme of the connection (e.g. "OAuth", "PAT").
    #[serde(default)]
    pub authorization_type: String,
    /// Whether the remote still considers the connection usable.
    #[serde(default)]
    pub is_connection_valid: bool,
}

/// Response body of `GET _apis/githubconnections`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsResponse {
    /// The connection records. An absent collection decodes as empty.
    #[serde(default)]
    pub value: Vec<WireConnection>,
}

/// One connected-repository record in the repos collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConnectedRepo {
    /// URL of the connected GitHub repository.
    pub git_hub_repository_url: String,
}

/// Response body of `GET _apis/githubconnections/{id}/repos`.
///
/// The repos endpoint also carries the connection's display name, which the
/// collection endpoint does not always populate.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionReposResponse {
    /// Display name of the connection, when present.
    #[serde(default)]
    pub name: Option<String>,
    /// The connected repositories, in remote-returned order.
    #[serde(default)]
    pub value: Vec<WireConnectedRepo>,
}

/// One repository URL inside an add-repositories request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRepoUrl {
    /// URL of the GitHub repository to attach.
    pub git_hub_repository_url: String,
}

/// Request body of `POST _apis/githubconnections/{id}/repos`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReposRequest {
    /// Repositories to operate on.
    pub git_hub_repository_urls: Vec<AddRepoUrl>,
    /// Batch operation kind; this tool only ever issues "add".
    pub operation_type: String,
}

impl AddReposRequest {
    /// Builds an add request for a single repository URL.
    pub fn single(repo_url: &str) -> Self {
        Self {
            git_hub_repository_urls: vec![AddRepoUrl {
                git_hub_repository_url: repo_url.to_string(),
            }],
            operation_type: "add".to_string(),
        }
    }
}

/// Decodes the connections collection response body.
pub fn decode_connections(body: &str) -> Result<ConnectionsResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        message: format!("connections response: {e}"),
    })
}

/// Decodes the connected-repos response body.
pub fn decode_connection_repos(body: &str) -> Result<ConnectionReposResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        message: format!("connection repos response: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Connections Response Decoding
    ///
    /// Tests that a well-formed connections collection decodes fully.
    ///
    /// ## Test Scenario
    /// - Decodes a two-connection body with mixed field presence
    ///
    /// ## Expected Outcome
    /// - Both records decode; absent optional fields take defaults
    #[test]
    fn test_decode_connections() {
        let body = r#"{
            "count": 2,
            "value": [
                {
                    "id": "conn-1",
                    "name": "First",
                    "authorizationType": "OAuth",
                    "isConnectionValid": true
                },
                { "id": "conn-2" }
            ]
        }"#;

        let decoded = decode_connections(body).unwrap();
        assert_eq!(decoded.value.len(), 2);
        assert_eq!(decoded.value[0].id, "conn-1");
        assert_eq!(decoded.value[0].name.as_deref(), Some("First"));
        assert_eq!(decoded.value[0].authorization_type, "OAuth");
        assert!(decoded.value[0].is_connection_valid);
        assert_eq!(decoded.value[1].id, "conn-2");
        assert!(decoded.value[1].name.is_none());
        assert!(!decoded.value[1].is_connection_valid);
    }

    /// # Missing Id Rejection
    ///
    /// Tests that a connection record without an id fails decoding.
    ///
    /// ## Test Scenario
    /// - Decodes a body whose record lacks the `id` field
    ///
    /// ## Expected Outcome
    /// - Decoding fails with a Decode error naming the missing field
    #[test]
    fn test_decode_connections_missing_id() {
        let body = r#"{ "value": [ { "name": "No Id" } ] }"#;
        let err = decode_connections(body).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().contains("id"));
    }

    /// # Empty Collection Decoding
    ///
    /// Tests that an empty connections collection is not an error.
    ///
    /// ## Test Scenario
    /// - Decodes a body with an empty value array, and one with no value key
    ///
    /// ## Expected Outcome
    /// - Both decode to zero connections
    #[test]
    fn test_decode_connections_empty() {
        let decoded = decode_connections(r#"{ "count": 0, "value": [] }"#).unwrap();
        assert!(decoded.value.is_empty());

        let decoded = decode_connections(r#"{}"#).unwrap();
        assert!(decoded.value.is_empty());
    }

    /// # Connected Repos Decoding
    ///
    /// Tests that the repos response decodes name and URLs in order.
    ///
    /// ## Test Scenario
    /// - Decodes a body with a name and two repo URLs
    ///
    /// ## Expected Outcome
    /// - Name and both URLs decode, preserving order
    #[test]
    fn test_decode_connection_repos() {
        let body = r#"{
            "name": "First",
            "value": [
                { "gitHubRepositoryUrl": "https://github.com/org/a" },
                { "gitHubRepositoryUrl": "https://github.com/org/b" }
            ]
        }"#;

        let decoded = decode_connection_repos(body).unwrap();
        assert_eq!(decoded.name.as_deref(), Some("First"));
        let urls: Vec<&str> = decoded
            .value
            .iter()
            .map(|r| r.git_hub_repository_url.as_str())
            .collect();
        assert_eq!(urls, vec![
            "https://github.com/org/a",
            "https://github.com/org/b"
        ]);
    }

    /// # Add Request Shape
    ///
    /// Tests that the add-repo request serializes to the documented shape.
    ///
    /// ## Test Scenario
    /// - Serializes a single-URL add request
    ///
    /// ## Expected Outcome
    /// - JSON carries gitHubRepositoryUrls and operationType "add"
    #[test]
    fn test_add_repos_request_shape() {
        let request = AddReposRequest::single("https://github.com/org/repo");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "gitHubRepositoryUrls": [
                    { "gitHubRepositoryUrl": "https://github.com/org/repo" }
                ],
                "operationType": "add"
            })
        );
    }

    /// # Malformed Body Rejection
    ///
    /// Tests that non-JSON bodies surface as Decode errors.
    ///
    /// ## Test Scenario
    /// - Decodes an HTML error page with both decoders
    ///
    /// ## Expected Outcome
    /// - Both return Decode errors
    #[test]
    fn test_decode_malformed_body() {
        let body = "<html>Sign in required</html>";
        assert!(matches!(
            decode_connections(body),
            Err(ApiError::Decode { .. })
        ));
        assert!(matches!(
            decode_connection_repos(body),
            Err(ApiError::Decode { .. })
        ));
    }
}
