//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// mxdb - resolve and check MongoDB connection descriptors
#[derive(Parser, Debug)]
#[command(name = "mxdb")]
#[command(version)]
#[command(about = "mxdb - resolve and check MongoDB connection descriptors", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a descriptor without connecting
    Resolve(ResolveArgs),

    /// Connect, authenticate if asked and ping a database
    Connect(ConnectArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Resolve Command
// =============================================================================

/// Arguments for the `resolve` command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Host descriptor, e.g. `localhost`, `mongodb://db:27018` or `a,b:27018,c`
    pub descriptor: String,

    /// Replica set name; treats the descriptor as a host list
    #[arg(short, long)]
    pub cluster: Option<String>,
}

// =============================================================================
// Connect Command
// =============================================================================

/// Arguments for the `connect` command
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Host descriptor (falls back to `connection.descriptor` in the config file)
    pub descriptor: Option<String>,

    /// Replica set name; treats the descriptor as a host list
    #[arg(short, long)]
    pub cluster: Option<String>,

    /// Database to select
    #[arg(short, long)]
    pub database: Option<String>,

    /// User to authenticate as
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the user
    #[arg(short, long, env = "MXDB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database to authenticate against (defaults to --database)
    #[arg(long)]
    pub authdb: Option<String>,

    /// Application name reported to the server
    #[arg(long)]
    pub app_name: Option<String>,

    /// Connection timeout in milliseconds
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    /// Server selection timeout in milliseconds
    #[arg(long)]
    pub server_selection_timeout_ms: Option<u64>,

    /// Path to config file (defaults to ./mxdb.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
