// crates/clusterviz-cli/src/io/logger.rs

use log::{Level, Log, Metadata, Record};

/// `LEVEL - message` lines on stderr.
pub struct StderrLogger {
    level: Level,
}

impl StderrLogger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

pub fn init(verbose: u8) -> anyhow::Result<()> {
    let level = level_for(verbose);
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0).to_level_filter(), LevelFilter::Warn);
        assert_eq!(level_for(1), Level::Info);
        assert_eq!(level_for(2), Level::Debug);
        assert_eq!(level_for(9), Level::Trace);
    }

    #[test]
    fn logger_filters_below_its_level() {
        let l = StderrLogger::new(Level::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(l.enabled(&info));
        assert!(!l.enabled(&debug));
    }
}
