//! Process-level setup and error reporting.

use crate::core::cli::CliArgs;

/// Handle application errors: print the error chain to stderr and exit
/// with code 1
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error building font:");
    eprintln!("{error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse and validate command line arguments, exiting on invalid input
pub fn get_cli_args() -> CliArgs {
    use clap::Parser;
    let args = CliArgs::parse();
    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(2);
    }
    args
}
