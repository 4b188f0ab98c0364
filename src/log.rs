use env_logger::{Builder, Target};
use log::LevelFilter;

/// Builds a logger writing to stderr, so diagnostics never mix with the
/// tour printed on stdout. `RUST_LOG` overrides the compiled-in level.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.target(Target::Stderr);

    // may be called a second time in test binaries
    let _ = builder.try_init();
}

/// Maps `-v` occurrences onto log levels, starting from `base`.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    const LEVELS: [LevelFilter; 5] = [
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base_index = LEVELS.iter().position(|&l| l == base).unwrap_or(0);
    let level = LEVELS[(base_index + verbosity).min(LEVELS.len() - 1)];

    build_logger_for_level(level);
}
