//! Basic-auth credential for the Azure DevOps REST API.
//!
//! This module provides the credential used to authenticate the
//! GitHub-connections endpoints: a username and a Personal Access Token (PAT)
//! combined into an HTTP Basic authorization header.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};

/// Username + PAT credential for Azure DevOps authentication.
///
/// The PAT is stored securely using `SecretString` and only exposed at the
/// moment the authorization header is rendered.
///
/// # Example
///
/// ```rust,no_run
/// use artado::api::BasicCredential;
/// use secrecy::SecretString;
///
/// let token = SecretString::from("your-pat-token".to_string());
/// let credential = BasicCredential::new("user@example.com".to_string(), token);
/// let header = credential.authorization_header();
/// ```
#[derive(Clone)]
pub struct BasicCredential {
    username: String,
    token: SecretString,
}

impl BasicCredential {
    /// Creates a new credential from a username and a SecretString PAT.
    pub fn new(username: String, token: SecretString) -> Self {
        Self { username, token }
    }

    /// Creates a new credential from plain strings.
    ///
    /// The token will be wrapped in a SecretString for secure handling.
    pub fn from_strings(username: String, token: String) -> Self {
        Self {
            username,
            token: SecretString::from(token),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Renders the `Authorization` header value.
    ///
    /// Azure DevOps accepts PATs over HTTP Basic authentication as
    /// `base64(username:token)`.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.token.expose_secret());
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

impl std::fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredential")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
