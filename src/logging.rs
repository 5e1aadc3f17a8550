//! Logger setup for the binary.

use env_logger::{Builder, Env};

/// Default filter for a given `-v` count. `RUST_LOG` still wins when set.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "camera_lister=warn",
        1 => "camera_lister=info",
        2 => "camera_lister=debug",
        _ => "camera_lister=trace,nokhwa=debug",
    }
}

pub fn init_logger(verbose: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));
    builder.format_timestamp(None);
    builder.format_target(true);

    let _ = builder.try_init();
}
