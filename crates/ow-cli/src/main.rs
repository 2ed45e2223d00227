use ow_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    // Initialize logging as early as possible; --debug traces go to stderr.
    if cli.debug {
        logging::init_logging_stderr(true);
    } else if logging::init_logging().is_err() {
        logging::init_logging_stderr(false);
    }

    if let Err(err) = cli.run() {
        eprintln!("ow error: {:#}", err);
        std::process::exit(1);
    }
}
