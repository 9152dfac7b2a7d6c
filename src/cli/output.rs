//! Handles all user-facing output for the CLI.
//!
//! Pretty-printing, colouring, JSON and error rendering live here so every
//! command reports in the same way.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::PathError;
use crate::links::SnapshotLink;
use crate::path::ExplorerPath;

/// Colour only when stdout is a terminal.
pub fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Renders an error through `miette` on stderr.
pub fn print_error(error: PathError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

/// Prints the decoded fields, one per line.
pub fn print_path(path: &ExplorerPath) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    print_field(&mut stdout, "pipeline", &path.pipeline_name)?;
    print_field(
        &mut stdout,
        "snapshot",
        path.snapshot_id.as_deref().unwrap_or("(none)"),
    )?;
    print_field(&mut stdout, "query", &path.ops_query)?;
    print_field(&mut stdout, "explode", &path.explode_composites.to_string())?;
    print_field(&mut stdout, "ops", &format!("{:?}", path.op_names))?;
    Ok(())
}

pub fn print_json(path: &ExplorerPath) -> Result<(), PathError> {
    let json = serde_json::to_string_pretty(path)
        .map_err(|e| PathError::internal("failed to serialize explorer path", e))?;
    println!("{json}");
    Ok(())
}

pub fn print_snapshot_link(link: &SnapshotLink) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    print_field(&mut stdout, "href", &link.href)?;
    print_field(&mut stdout, "label", &link.label)
}

/// Prints `canonical`, preceded by a character diff when `input` differs.
pub fn print_canonical(input: &str, canonical: &str) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    if input != canonical {
        let changeset = Changeset::new(input, canonical, "");
        print_inline_diff(&mut stdout, &changeset.diffs)?;
    }
    writeln!(stdout, "{canonical}")
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_field(stdout: &mut StandardStream, name: &str, value: &str) -> std::io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(stdout, "{name:>9}")?;
    stdout.reset()?;
    writeln!(stdout, " {value}")
}

fn print_inline_diff(stdout: &mut StandardStream, diffs: &[Difference]) -> std::io::Result<()> {
    for diff in diffs {
        match diff {
            Difference::Same(x) => {
                stdout.reset()?;
                write!(stdout, "{x}")?;
            }
            Difference::Add(x) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_underline(true))?;
                write!(stdout, "{x}")?;
            }
            Difference::Rem(x) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(stdout, "{x}")?;
            }
        }
    }
    stdout.reset()?;
    writeln!(stdout)
}
