//! A `log` backend that writes records to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct StderrLogger {
    color: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let choice = if self.color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stderr = StandardStream::stderr(choice);
        let mut style = ColorSpec::new();
        style.set_fg(Some(level_color(record.level()))).set_bold(true);

        // Nowhere to report a failure to write a log line.
        let _ = stderr.set_color(&style);
        let _ = write!(&mut stderr, "{:>5}", record.level());
        let _ = stderr.reset();
        let _ = writeln!(&mut stderr, " [{}] {}", record.target(), record.args());
    }

    fn flush(&self) {}
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    }
}

/// Maps the number of `-v` flags to a maximum log level.
pub(crate) fn level_for_verbosity(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger for the process. Can only succeed once.
pub fn init_logger(verbosity: u64, color: bool) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { color }))?;
    log::set_max_level(level_for_verbosity(verbosity));
    Ok(())
}
