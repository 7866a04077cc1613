//! Builds vector font outlines from grid stroke sketches.
//!
//! Every character is drawn as a few strokes and dots on a small grid;
//! this tool turns them into merged outlines and writes a UFO source.

use strokefont::{core, logging};

fn main() {
    let cli_args = core::platform::get_cli_args();

    let log_guard = match logging::init_logging(cli_args.verbose, cli_args.log_file) {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("Logging unavailable: {error}");
            None
        }
    };

    let result = core::run_app(cli_args);
    // Flush file logs before a possible process exit
    drop(log_guard);

    match result {
        Ok(Some(outcome)) => {
            println!(
                "Wrote {} glyphs to {}",
                outcome.record.glyphs.len(),
                outcome.ufo_path.display()
            );
        }
        Ok(None) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
