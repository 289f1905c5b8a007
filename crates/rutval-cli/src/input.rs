//! # Input Gathering
//!
//! Resolves the identifier list for a subcommand: positional values when
//! given, otherwise a newline-delimited file, otherwise stdin. Surrounding
//! whitespace per line is trimmed and blank lines are skipped, so exports
//! with trailing newlines or padded columns feed in unchanged.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Collect the identifiers a subcommand should process.
pub fn gather(values: Vec<String>, file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };

    Ok(parse_lines(&text))
}

/// Split newline-delimited input into trimmed, non-empty identifiers.
fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
