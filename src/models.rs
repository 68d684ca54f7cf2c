//! Domain models and CLI argument definitions for artado.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// A GitHub connection configured on an Azure DevOps project.
///
/// Built fresh on every registry read; nothing is cached across calls. The
/// repo URL list preserves remote-returned order and keeps duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Remote-assigned, stable, opaque identifier.
    pub id: String,
    /// Display name of the connection.
    pub name: String,
    /// Authorization scheme of the connection (e.g. "OAuth", "PAT").
    pub authorization_type: String,
    /// Whether the remote still considers the connection usable.
    pub is_connection_valid: bool,
    /// URLs of the repositories associated through this connection.
    pub repo_urls: Vec<String>,
}

impl Connection {
    /// Returns true if the given URL is associated through this connection.
    ///
    /// Comparison is exact string match; the remote is assumed to echo URLs
    /// byte-for-byte.
    pub fn contains_repo(&self, repo_url: &str) -> bool {
        self.repo_urls.iter().any(|url| url == repo_url)
    }
}

/// The success value of one attach call: which URL landed on which connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachReceipt {
    /// The connection the repository was attached to.
    pub connection_id: String,
    /// The attached repository URL.
    pub repo_url: String,
}

/// Command-line arguments for the artado binary.
#[derive(Parser, Clone, Debug)]
#[command(
    author,
    version,
    about = "Manage GitHub connections on an Azure DevOps project",
    long_about = "A CLI tool for managing the GitHub connections of an Azure DevOps project.\n\n\
        Artado helps you:\n  \
        • List connections and their connected repositories\n  \
        • Attach repositories to a connection, singly or in bulk\n  \
        • Export the connection/repo mapping to a YAML snapshot\n  \
        • Graft all repositories from one connection onto another\n\n\
        Configuration can be provided via CLI arguments, environment variables (ADO_*),\n\
        or a config file (~/.config/artado/config.toml).",
    after_help = "EXAMPLES:\n    \
        # List connections\n    \
        artado list -o myorg -p myproject\n\n    \
        # Attach one repository\n    \
        artado add --repo https://github.com/org/repo --connection <CONNECTION_ID>\n\n    \
        # Attach every repository listed in a file\n    \
        artado add-bulk --file repos.txt --connection <CONNECTION_ID>\n\n    \
        # Export a snapshot of all connections\n    \
        artado output\n\n    \
        # Graft repositories from one connection to another\n    \
        artado graft --from <SOURCE_ID> --to <TARGET_ID> connections/connections-2024-01-01-00-00-00.yml\n\n    \
        # Create a sample config file\n    \
        artado --create-config",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub shared: SharedArgs,

    /// Create a sample configuration file at ~/.config/artado/config.toml
    #[arg(long)]
    pub create_config: bool,
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Clone, Debug, Default)]
pub struct SharedArgs {
    /// Azure DevOps organization name
    #[arg(short, long, global = true)]
    pub organization: Option<String>,

    /// Azure DevOps project name
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Username for Basic authentication
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Personal Access Token for Basic authentication
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Log level (trace, debug, info, warn, error); logging is off when unset
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output file (defaults to stderr)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log output format (text, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

/// Subcommands of the artado binary.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List GitHub connections and their connected repositories
    List,

    /// Add a repo to a given connection
    Add {
        /// Repository URL to add to the connection
        #[arg(short, long)]
        repo: String,

        /// Connection ID to add the repo to
        #[arg(short, long)]
        connection: String,
    },

    /// Add every repo listed in a text file to a given connection
    AddBulk {
        /// Text file with one repository URL per line
        #[arg(short, long)]
        file: PathBuf,

        /// Connection ID to add the repos to
        #[arg(short, long)]
        connection: String,
    },

    /// Export a YAML snapshot of all connections and their repos
    Output,

    /// Graft repositories from one connection to another
    Graft {
        /// Snapshot file produced by the output subcommand
        snapshot_file: PathBuf,

        /// Connection ID to graft from, as recorded in the snapshot file
        #[arg(short, long)]
        from: String,

        /// Connection ID to graft to
        #[arg(short = 'T', long)]
        to: String,
    },
}
