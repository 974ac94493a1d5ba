use log::LevelFilter;
use std::env;

/// Initialize the logger on the standard error stream.
///
/// The level is `Info`, or `Debug` when `debug` is set. `RUST_LOG` takes
/// precedence over both when it is defined.
pub fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
    log::debug!("Logger initialized at {:?} level", level);
}
