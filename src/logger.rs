use env_logger::Builder;
use log::LevelFilter;

/// Maps `-v` occurrences to a level: warn, info, then debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Sets up the log sink once per process. `RUST_LOG` still wins.
pub fn init(verbosity: u8) {
    Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
