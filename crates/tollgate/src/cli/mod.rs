//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `demo`: Replay the reference client flow against the shared store
//! - `list`: List every vehicle in insertion order
//! - `show`: Show one vehicle
//! - `search`: Search vehicles, synchronously or on the blocking pool
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Path to a YAML store configuration
//!
//! # Example
//!
//! ```bash
//! tollgate demo
//! tollgate search Car --async
//! tollgate --json show 3
//! ```

mod execute;

pub use execute::{DemoReport, run_demo};

use crate::config::StoreConfig;
use crate::lifecycle::StoreContext;
use crate::output::OutputMode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tollgate - an in-process vehicle toll record store
///
/// Holds toll records in memory and supports CRUD and free-text search.
#[derive(Parser, Debug)]
#[command(name = "tollgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a YAML store configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replay the reference client flow
    ///
    /// Adds a vehicle, updates and deletes another, then runs one synchronous
    /// and one asynchronous search. The store is cleared afterwards.
    Demo,

    /// List every vehicle in insertion order
    List,

    /// Show one vehicle by id
    Show {
        /// Vehicle id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Search vehicles
    ///
    /// Matches the query against id, license plate and toll amount as
    /// substrings, and against the vehicle type as a case-insensitive prefix.
    /// Results are ordered by license plate.
    Search {
        /// Search text
        query: String,

        /// Run the search on the blocking pool
        #[arg(long = "async")]
        run_async: bool,
    },
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let config = StoreConfig::load_or_default(self.config.as_deref()).await?;
        let context = StoreContext::new(config);

        match &self.command {
            Commands::Demo => execute::execute_demo(&context, output_mode).await,
            Commands::List => execute::execute_list(&context, output_mode).await,
            Commands::Show { id } => execute::execute_show(&context, *id, output_mode).await,
            Commands::Search { query, run_async } => {
                execute::execute_search(&context, query, *run_async, output_mode).await
            }
        }
    }
}
