//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "meili")]
#[command(about = "Command-line client for the search service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Connection flags. Each one falls back to its environment variable.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Service URL
    #[arg(long, env = "MEILI_HOST", global = true)]
    pub host: Option<String>,

    /// API key sent with every request
    #[arg(long, env = "MEILI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "MEILI_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the service is healthy
    Health,
    /// Show the service version
    Version,
    /// Manage indexes
    #[command(subcommand)]
    Indexes(IndexesCommand),
    /// Manage documents
    #[command(subcommand)]
    Documents(DocumentsCommand),
    /// Search an index
    Search {
        /// Index uid
        index: String,
        /// Query text
        query: String,
        /// Number of hits to skip
        #[arg(long)]
        offset: Option<u64>,
        /// Maximum number of hits
        #[arg(long)]
        limit: Option<u64>,
        /// Filter expression
        #[arg(long)]
        filters: Option<String>,
    },
    /// Inspect asynchronous updates
    #[command(subcommand)]
    Updates(UpdatesCommand),
    /// Show index statistics
    Stats {
        /// Index uid; every index when omitted
        index: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum IndexesCommand {
    /// List every index
    List,
    /// Show one index
    Get { uid: String },
    /// Create an index
    Create {
        /// Index uid; generated by the service when omitted
        uid: Option<String>,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an index and its documents
    Delete { uid: String },
}

#[derive(Debug, Subcommand)]
pub enum DocumentsCommand {
    /// Show one document
    Get { index: String, id: String },
    /// Add or replace documents from a JSON array file
    Add {
        index: String,
        /// File holding a JSON array of documents
        #[arg(long, short)]
        file: PathBuf,
        /// Wait until the update is processed
        #[arg(long)]
        wait: bool,
    },
    /// List documents
    List {
        index: String,
        #[arg(long)]
        offset: Option<u64>,
        #[arg(long)]
        limit: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum UpdatesCommand {
    /// Show one update
    Get { index: String, id: u64 },
    /// Wait until an update is processed or failed
    Wait {
        index: String,
        id: u64,
        /// Poll interval in milliseconds
        #[arg(long, default_value = "50")]
        interval_ms: u64,
        /// Give up after this many milliseconds
        #[arg(long, default_value = "5000")]
        timeout_ms: u64,
    },
}
