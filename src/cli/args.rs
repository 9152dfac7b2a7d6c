//! Defines the command-line arguments and subcommands for the explorer-path CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "explorer-path",
    version,
    about = "Encode, decode and rewrite pipeline explorer paths."
)]
pub struct ExplorerPathArgs {
    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode navigation state into an explorer path.
    Encode {
        /// The pipeline or job name.
        #[arg(required = true)]
        pipeline: String,
        /// Op names drilled into, outermost first.
        op_names: Vec<String>,
        /// Pin the path to a historical snapshot.
        #[arg(long)]
        snapshot: Option<String>,
        /// Op selection query.
        #[arg(long, default_value = "")]
        query: String,
        /// Show composites expanded. Only recorded when a query is given.
        #[arg(long)]
        explode: bool,
    },
    /// Decode an explorer path and print its fields.
    Decode {
        /// The explorer path to decode.
        #[arg(required = true)]
        path: String,
        /// Print the fields as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Decode then re-encode a path, showing any difference.
    Canonicalize {
        /// The explorer path to normalize.
        #[arg(required = true)]
        path: String,
    },
    /// Print the link to a pipeline snapshot.
    SnapshotLink {
        /// The pipeline or job name.
        #[arg(required = true)]
        pipeline: String,
        /// The snapshot id.
        #[arg(required = true)]
        snapshot_id: String,
    },
    /// Rewrite a location so its pipeline path no longer pins a snapshot.
    StripSnapshot {
        /// The full location pathname.
        #[arg(required = true)]
        location: String,
        /// The explorer path contained in the location.
        #[arg(required = true)]
        pipeline_path: String,
    },
}
