use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the current scan and review progress.
    Status,
    /// List the loaded scans in review order.
    Scans,
    /// Review scans interactively, one decision per line.
    Review(ReviewArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `scan-review review`.
#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Read review commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<String>,
    /// Session key (defaults to `review.session_key` from config).
    #[arg(long)]
    pub session: Option<String>,
}

/// Arguments for `scan-review schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, or `list` to show all names.
    #[arg(default_value = "list")]
    pub type_name: String,
}
