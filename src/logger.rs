use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Log, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

fn add_console_sinks(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let stdout = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stdout)
        .level_filter(LevelFilter::MoreVerbose(Level::Warn))
        .build()?);

    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .level_filter(LevelFilter::MoreSevereEqual(Level::Warn))
        .build()?);

    builder.sink(stdout).sink(stderr);

    Ok(())
}

/// Installs the default logger. Without a `[log]` section and without
/// `verbose` the spdlog default logger is kept. `verbose` forces Debug
/// output to the console.
pub fn configure_logger(log: Option<&Log>, verbose: bool) -> spdlog::Result<()> {
    let mut builder = Logger::builder();
    let mut level = Level::Info;
    let mut log_to_console = verbose;

    match log {
        Some(log) => {
            if let Some(ref location) = log.location {
                let daily_sink = Arc::new(RotatingFileSink::builder()
                    .base_path(location)
                    .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
                    .max_files(60)
                    .rotate_on_open(false)
                    .build()?);
                builder.sink(daily_sink);
            }
            level = log.level.into();
            log_to_console |= log.log_to_console;
        }
        None if !verbose => return Ok(()),
        None => {}
    }

    if verbose {
        level = Level::Debug;
    }
    if log_to_console {
        add_console_sinks(&mut builder)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(level));

    spdlog::set_default_logger(logger);

    Ok(())
}
