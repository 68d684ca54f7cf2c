//! Core operations for connection management.
//!
//! This module provides UI-independent implementations of the operations
//! behind the artado subcommands.
//!
//! # Modules
//!
//! - [`bulk_attach`] - Attaching every repo listed in a text file
//! - [`snapshot_export`] - Exporting the connection registry to a YAML snapshot
//! - [`graft`] - Copying repositories between connections with verification

pub mod bulk_attach;
pub mod graft;
pub mod snapshot_export;

// Re-export commonly used types
pub use bulk_attach::{BulkAttachOperation, BulkAttachOutcome, read_repo_list};
pub use graft::{GraftOperation, GraftOutcome, GraftRequest};
pub use snapshot_export::{SnapshotExport, SnapshotExportOperation};
