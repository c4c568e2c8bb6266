//! Stderr logger behind the `log` facade.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::cli::ColorChoice;

struct StderrLogger {
    colored: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if self.colored {
            eprintln!(
                "\x1b[90m{} \x1b[{}m> {}\x1b[0m",
                record.target(),
                level_color(record.level()),
                record.args()
            );
        } else {
            eprintln!("{} {}> {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// ANSI foreground color per level.
fn level_color(level: Level) -> u8 {
    match level {
        Level::Error => 31,
        Level::Warn => 33,
        Level::Info | Level::Debug => 34,
        Level::Trace => 90,
    }
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the logger once; later calls are no-ops.
pub fn init(verbosity: u8, color: ColorChoice) {
    let logger = StderrLogger {
        colored: color.should_colorize(),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level_filter(verbosity));
    }
}
