//! CLI binary entry point for apicore-config-cli

#[cfg(feature = "cli")]
use apicore_config::cli::commands::{handle_preview, handle_validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "apicore-config-cli")]
#[command(about = "CLI wrapper for the APICORE configuration core")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Validate an APICORE document
    Validate {
        /// Input file path or '-' for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Parse a document and print its persisted form
    Preview {
        /// Input file path or '-' for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { input } => handle_validate(&input),
        Commands::Preview { input } => handle_preview(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
