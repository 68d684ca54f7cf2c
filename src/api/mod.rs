//! Azure DevOps GitHub-connections API module.
//!
//! This module provides a client for the githubconnections endpoint family,
//! covering the three operations the tool needs:
//!
//! - Listing connections, enriched with their connected repositories
//! - Listing the repositories of a single connection
//! - Attaching a repository URL to a connection
//!
//! ## Example
//!
//! ```rust,no_run
//! use artado::ConnectionsClient;
//! use secrecy::SecretString;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ConnectionsClient::new(
//!     "my-org".to_string(),
//!     "my-project".to_string(),
//!     "user@example.com".to_string(),
//!     SecretString::from("my-pat".to_string()),
//! )?;
//!
//! for connection in client.list_connections().await? {
//!     println!("{}: {} repo(s)", connection.id, connection.repo_urls.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod credential;
pub mod mappers;
pub mod traits;

// Re-export the client and its public items
pub use client::ConnectionsClient;
pub use credential::BasicCredential;
pub use traits::{ConnectionOperations, RealConnectionOperations};
