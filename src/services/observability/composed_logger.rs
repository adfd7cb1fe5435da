
use crate::configuration::models::log_settings::LogSettings;
use env_filter::Filter;
use env_logger::fmt::TimestampPrecision;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_boxed_logger, set_max_level};

/// Dispatches every record to all sinks that accept it.
/// When a global filter is set, records it rejects never reach a sink.
#[derive(Default)]
pub struct ComposedLogger {
    loggers: Vec<Box<dyn Log>>,
    global_filter: Option<Filter>,
}

impl ComposedLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Box<dyn Log>) -> Self {
        self.loggers.push(logger);
        self
    }

    pub fn with_global_filter(mut self, filter: Filter) -> Self {
        self.global_filter = Some(filter);
        self
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self
            .global_filter
            .as_ref()
            .map(Filter::filter)
            .unwrap_or(LevelFilter::Info);
        set_boxed_logger(Box::new(self))?;
        set_max_level(max_level);
        Ok(())
    }
}

impl Log for ComposedLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.global_filter.as_ref().is_none_or(|filter| filter.enabled(metadata))
            && self.loggers.iter().any(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if self.global_filter.as_ref().is_some_and(|filter| !filter.matches(record)) {
            return;
        }
        for logger in &self.loggers {
            if logger.enabled(record.metadata()) {
                logger.log(record);
            }
        }
    }

    fn flush(&self) {
        for logger in &self.loggers {
            logger.flush();
        }
    }
}

/// Timestamped stderr output, structured key-values appended to each line
pub fn console_sink(settings: &LogSettings) -> env_logger::Logger {
    env_logger::Builder::new()
        .parse_filters(&settings.level)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .build()
}

pub fn init_logger(settings: &LogSettings) -> Result<(), SetLoggerError> {
    let global_filter = env_filter::Builder::new().parse(&settings.level).build();
    ComposedLogger::new()
        .with_logger(Box::new(console_sink(settings)))
        .with_global_filter(global_filter)
        .init()
}
