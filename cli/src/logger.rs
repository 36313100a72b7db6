use ansi_term::{ANSIString, Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct Logger {
    max_level: LevelFilter,
    colors_enabled: bool,
}

impl Logger {
    fn prefix(&self, level: Level) -> ANSIString<'static> {
        let style = if self.colors_enabled {
            let color = match level {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Cyan,
                Level::Debug => Color::Purple,
                Level::Trace => Color::Green,
            };
            color.bold()
        } else {
            Style::new()
        };
        style.paint(format!("[{}]", level))
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Debug and trace records name the module that emitted them
        if record.level() >= Level::Debug {
            eprintln!("{} {}: {}", self.prefix(record.level()), record.target(), record.args());
        } else {
            eprintln!("{} {}", self.prefix(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init(max_level: LevelFilter, colors_enabled: bool) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger { max_level, colors_enabled }))?;
    log::set_max_level(max_level);
    Ok(())
}
