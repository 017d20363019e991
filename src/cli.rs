//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasktracker_web::StoreBackend;

/// TaskTracker - a refined workspace for your daily objectives
#[derive(Parser, Debug)]
#[command(name = "tasktracker")]
#[command(version)]
#[command(about = "Serve the TaskTracker web UI and task API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// TOML configuration file
        #[arg(short, long, env = "TASKTRACKER_CONFIG")]
        config: Option<PathBuf>,

        /// Address to bind to, overriding the configuration
        #[arg(short, long)]
        bind: Option<String>,

        /// Task store backend (memory or postgrest)
        #[arg(long)]
        store: Option<StoreBackend>,

        /// Tracing filter directive, overriding RUST_LOG
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Print the effective configuration with secrets masked
    CheckConfig {
        /// TOML configuration file
        #[arg(short, long, env = "TASKTRACKER_CONFIG")]
        config: Option<PathBuf>,
    },
}
