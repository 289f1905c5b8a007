//! # Format Subcommand
//!
//! Canonical `body-verifier` rendering without checksum verification, for
//! normalizing stored values before a later validation pass.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Identifiers to format; reads --file or stdin when empty.
    pub values: Vec<String>,

    /// Read newline-delimited identifiers from a file.
    #[arg(long, conflicts_with = "values")]
    pub file: Option<PathBuf>,
}

/// Print the canonical rendering of every gathered input.
pub fn run(args: FormatArgs) -> anyhow::Result<()> {
    let inputs = crate::input::gather(args.values, args.file.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for raw in &inputs {
        writeln!(out, "{}", rutval_core::format(raw))?;
    }
    Ok(())
}
