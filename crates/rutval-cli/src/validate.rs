//! # Validate Subcommand
//!
//! Batch checksum verification. Prints one line per input and exits
//! non-zero when any identifier fails, so import pipelines can gate on the
//! exit status while still seeing every rejection reason.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate; reads --file or stdin when empty.
    pub values: Vec<String>,

    /// Read newline-delimited identifiers from a file.
    #[arg(long, conflicts_with = "values")]
    pub file: Option<PathBuf>,

    /// Emit one JSON object per input instead of human-readable lines.
    #[arg(long)]
    pub json: bool,
}

/// Validate every gathered input, reporting per-line outcomes.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let inputs = crate::input::gather(args.values, args.file.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut invalid = 0usize;

    for raw in &inputs {
        let result = rutval_core::validate(raw);
        if !result.valid {
            invalid += 1;
        }
        if args.json {
            let line = serde_json::to_string(&result)?;
            writeln!(out, "{line}")?;
        } else {
            match &result.error {
                None => writeln!(out, "ok {}", result.formatted)?,
                Some(error) => writeln!(out, "invalid {}: {error}", result.formatted)?,
            }
        }
    }

    tracing::info!(total = inputs.len(), invalid, "validation finished");

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} identifiers failed validation", inputs.len());
    }
    Ok(())
}
