use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod logging;
mod pass;
mod rng;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    if env::args_os().len() == 1 {
        logging::init(0);
        return tui::run();
    }

    let flags = CliFlags::parse();
    logging::init(flags.verbose);

    if flags.interactive {
        cli::quiet::set(flags.quiet);
        return tui::run();
    }
    cli::run(flags)
}
