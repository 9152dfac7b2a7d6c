//! The explorer-path Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, ExplorerPathArgs};
use crate::codec::{explorer_path_from_string, explorer_path_to_string};
use crate::diagnostics::PathError;
use crate::links::{strip_snapshot_from_location, SnapshotLink};
use crate::path::ExplorerPath;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ExplorerPathArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = dispatch(args.command) {
        output::print_error(e);
        process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), PathError> {
    match command {
        Command::Encode {
            pipeline,
            op_names,
            snapshot,
            query,
            explode,
        } => {
            let mut path = ExplorerPath::new(pipeline)
                .with_query(query)
                .exploded(explode)
                .with_op_names(op_names);
            path.snapshot_id = snapshot;
            println!("{}", path.try_encode()?);
        }

        Command::Decode { path, json } => {
            let decoded = explorer_path_from_string(&path);
            if json {
                output::print_json(&decoded)?;
            } else {
                output::print_path(&decoded).map_err(io_error)?;
            }
        }

        Command::Canonicalize { path } => {
            let canonical = explorer_path_to_string(&explorer_path_from_string(&path));
            debug!(input = %path, %canonical, "canonicalized");
            output::print_canonical(&path, &canonical).map_err(io_error)?;
        }

        Command::SnapshotLink {
            pipeline,
            snapshot_id,
        } => {
            ExplorerPath::new(pipeline.as_str())
                .with_snapshot(snapshot_id.as_str())
                .validate()?;
            output::print_snapshot_link(&SnapshotLink::new(&pipeline, &snapshot_id))
                .map_err(io_error)?;
        }

        Command::StripSnapshot {
            location,
            pipeline_path,
        } => {
            let stripped = strip_snapshot_from_location(&location, &pipeline_path)?;
            println!("{}", stripped.unwrap_or(location));
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn io_error(e: std::io::Error) -> PathError {
    PathError::internal("failed to write output", e)
}
