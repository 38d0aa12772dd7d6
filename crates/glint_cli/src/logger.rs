use env_logger::Builder;
use log::LevelFilter;

/// Initialize the logger with the specified level
///
/// A non-empty `RUST_LOG` takes precedence over `level`.
pub fn init_logger(level: LevelFilter) {
    let rust_log = std::env::var("RUST_LOG").ok();
    logger_builder(level, rust_log.as_deref()).init();
}

fn logger_builder(level: LevelFilter, rust_log: Option<&str>) -> Builder {
    let mut builder = Builder::new();

    match rust_log.filter(|filters| !filters.trim().is_empty()) {
        Some(filters) => builder.parse_filters(filters),
        None => builder.filter_level(level),
    };

    builder
}
