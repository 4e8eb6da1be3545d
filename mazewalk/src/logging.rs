use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize as _};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

/// Installs the logger, later calls only change the level.
pub fn init(level: log::LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Writes records to stderr as `LEVEL source -> message`.
pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
    colored: bool,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            colored: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|err| err.into_inner())
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        *self.min_level.write().unwrap_or_else(|err| err.into_inner()) = level;
    }

    fn format(&self, record: &Record) -> String {
        let level = format!("{:<5}", record.level());
        let level = if self.colored {
            let color = match record.level() {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::White,
                log::Level::Debug => Color::Blue,
                log::Level::Trace => Color::Grey,
            };
            level.with(color).to_string()
        } else {
            level
        };

        format!(
            "{} {} -> {}",
            level,
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_level() {
        let logger = AppLogger::new(log::LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(log::LevelFilter::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn plain_format() {
        let logger = AppLogger {
            min_level: RwLock::new(log::LevelFilter::Trace),
            colored: false,
        };
        assert_eq!(
            logger.format(
                &Record::builder()
                    .args(format_args!("carved {}", 3))
                    .level(log::Level::Debug)
                    .module_path(Some("mazecore::algorithms"))
                    .build()
            ),
            "DEBUG mazecore::algorithms -> carved 3"
        );
    }
}
