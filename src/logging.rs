//! Logger setup shared by every lesson.

use log::LevelFilter;

/// Environment variable read for the log level.
pub const LOG_ENV: &str = "GL_TRIANGLES_LOG";

/// Parses a level name, falling back to `Info` for anything unrecognised.
pub fn level_from_str(s: &str) -> LevelFilter {
    s.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Installs a stdout logger with a local timestamp.
///
/// Calling this twice returns an error from the second call, since only one global logger can
/// be set.
pub fn init() -> Result<(), String> {
    let level = std::env::var(LOG_ENV)
        .map(|s| level_from_str(&s))
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}
