//! Logger setup. Logs go to stderr so stdout carries only passwords.

use env_logger::{Builder, Env, Target};

/// `RUST_LOG` wins over the `-v` count when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(true)
        .try_init();
}
