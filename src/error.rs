//! Unified error handling for the artado library.
//!
//! This module provides a comprehensive error hierarchy using `thiserror` for better
//! programmatic error handling and more informative error messages.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: Errors from Azure DevOps GitHub-connections API interactions
//! - [`ConfigError`]: Errors from configuration loading and validation
//! - [`SnapshotError`]: Errors from snapshot file export and parsing
//! - [`BulkAttachError`]: Errors from bulk repository attachment
//! - [`GraftError`]: Errors from the graft workflow
//!
//! ## Example
//!
//! ```rust,no_run
//! use artado::error::{ArtadoError, ApiError};
//!
//! fn example() -> Result<(), ArtadoError> {
//!     // Errors are automatically converted via From trait
//!     Err(ApiError::EmptyRepoUrl)?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the artado library.
///
/// This enum encompasses all possible errors that can occur while listing
/// connections, attaching repositories, exporting snapshots, and grafting.
#[derive(Error, Debug)]
pub enum ArtadoError {
    /// An error occurred while interacting with the Azure DevOps API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// An error occurred while loading or validating configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An error occurred while writing or reading a connection snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// An error occurred during a bulk attach run.
    #[error("Bulk attach error: {0}")]
    BulkAttach(#[from] BulkAttachError),

    /// An error occurred during a graft operation.
    #[error("Graft error: {0}")]
    Graft(#[from] GraftError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur when interacting with the GitHub-connections API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An empty repository URL was passed to an attach call.
    ///
    /// This is rejected locally, before any network request is issued.
    #[error("Repository URL must not be empty")]
    EmptyRepoUrl,

    /// The request could not be constructed or the network transport failed.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// A read request returned a non-success status.
    #[error("API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// The request URL, for operator context.
        url: String,
    },

    /// Failed to decode an API response body.
    #[error("Failed to decode API response: {message}")]
    Decode {
        /// Description of the decode error.
        message: String,
    },

    /// The remote rejected an attach mutation (any status other than 200).
    #[error("Failed to add repo {repo_url} to connection {connection_id} (status {status})")]
    AttachFailed {
        /// The repository URL that was being attached.
        repo_url: String,
        /// The connection the attach targeted.
        connection_id: String,
        /// HTTP status code returned by the remote.
        status: u16,
    },
}

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration field is missing.
    #[error("{field} is required (use --{field}, {env_var} env var, or config file)")]
    MissingRequired {
        /// Name of the missing field.
        field: String,
        /// Environment variable name for this field.
        env_var: String,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file at {path}: {message}")]
    FileReadError {
        /// Path to the config file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError {
        /// Path to the config file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Failed to create the config directory.
    #[error("Failed to create config directory at {path}: {message}")]
    DirectoryCreationError {
        /// Path where directory creation failed.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Errors that can occur while exporting or reading connection snapshots.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to create the snapshot output directory.
    #[error("Failed to create snapshot directory at {path}: {message}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to write the snapshot file.
    #[error("Failed to write snapshot file at {path}: {message}")]
    Write {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to serialize the snapshot entries.
    #[error("Failed to serialize snapshot: {message}")]
    Serialize {
        /// Serialization error message.
        message: String,
    },

    /// Failed to read a snapshot file.
    #[error("Failed to read snapshot file at {path}: {message}")]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to parse a snapshot file.
    #[error("Failed to parse snapshot file at {path}: {message}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Errors that can occur during a bulk attach run.
#[derive(Error, Debug)]
pub enum BulkAttachError {
    /// The input file could not be opened or read.
    #[error("Failed to read repo list file at {path}: {message}")]
    FileRead {
        /// Path of the input file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The input file contained zero non-blank lines.
    #[error("Repo list file at {path} is empty")]
    FileEmpty {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// One or more attach attempts failed.
    ///
    /// The run is not atomic: repositories attached before or after a failing
    /// line stay attached. Callers should inspect the succeeded list alongside
    /// this error.
    #[error("Failed to add the following repos: {failed:?}")]
    SomeAttachesFailed {
        /// Repo URLs whose attach attempt failed, in file order.
        failed: Vec<String>,
    },
}

/// Errors that can occur during the graft workflow.
#[derive(Error, Debug)]
pub enum GraftError {
    /// Source and target connection ids are identical.
    #[error("Source and target are both {connection_id}: provide different connection IDs")]
    SameConnection {
        /// The id given for both ends of the graft.
        connection_id: String,
    },

    /// The snapshot file could not be read or parsed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The source connection id was not present in the snapshot file.
    #[error("Connection ID {connection_id} not found in snapshot file")]
    SourceNotFound {
        /// The missing source id.
        connection_id: String,
    },

    /// The target connection id was not present in the live registry.
    #[error("Connection ID {connection_id} not found")]
    TargetNotFound {
        /// The missing target id.
        connection_id: String,
    },

    /// An API call failed during the copy or verification phase.
    ///
    /// For copy-phase failures, URLs copied before the failure remain
    /// attached on the target.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A copied URL was missing from the target on the post-copy read.
    #[error("Repo {repo_url} not found in connection {connection_id}")]
    Verification {
        /// The URL that the live registry did not contain.
        repo_url: String,
        /// The target connection that was verified.
        connection_id: String,
    },
}

/// Type alias for Results using ArtadoError.
///
/// Note: This is not re-exported from the crate root to avoid shadowing `anyhow::Result`.
/// Use explicitly as `error::Result<T>` when needed.
pub type ArtadoResult<T> = std::result::Result<T, ArtadoError>;
