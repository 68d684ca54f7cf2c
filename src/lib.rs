//! # Artado Library
//!
//! A library for managing the GitHub connections of an Azure DevOps project.
//! This library provides tools for:
//!
//! - Listing connections and their connected repositories
//! - Attaching repositories to a connection, singly or in bulk
//! - Exporting the connection/repo mapping to YAML snapshots
//! - Grafting repositories from one connection onto another, with
//!   post-copy verification
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use artado::ConnectionsClient;
//! use secrecy::SecretString;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = ConnectionsClient::new(
//!     "my-org".to_string(),
//!     "my-project".to_string(),
//!     "user@example.com".to_string(),
//!     SecretString::from("my-pat".to_string()),
//! )?;
//!
//! // List connections
//! let connections = client.list_connections().await?;
//! println!("Found {} connections", connections.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsed_property;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use api::ConnectionsClient;
pub use config::{Config, ResolvedConfig};
pub use models::{Args, AttachReceipt, Connection};

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
