//! # rutval CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// RUT validation toolkit — batch checksum verification and normalization.
///
/// Validates checksummed identifiers against their verification character
/// and renders them in canonical body-verifier form, from arguments, files,
/// or stdin.
#[derive(Parser, Debug)]
#[command(name = "rutval", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate identifiers against their verification character.
    Validate(rutval_cli::validate::ValidateArgs),
    /// Render identifiers in canonical form without verification.
    Format(rutval_cli::format::FormatArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => rutval_cli::validate::run(args),
        Commands::Format(args) => rutval_cli::format::run(args),
    }
}
