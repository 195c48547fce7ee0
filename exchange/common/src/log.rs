use std::str::FromStr;

use eyre::{eyre, Context, Result};
use serde::*;
use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    /// Trace without silencing the http stack
    Detail,
}
impl LogLevel {
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Detail => LevelFilter::TRACE,
        }
    }
}
impl FromStr for LogLevel {
    type Err = eyre::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            "detail" => Ok(LogLevel::Detail),
            "off" => Ok(LogLevel::Off),
            _ => Err(eyre!("Invalid log level: {}", s)),
        }
    }
}
fn build_env_filter(log_level: LogLevel) -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env().add_directive(log_level.as_level_filter().into());
    if log_level != LogLevel::Detail {
        filter = filter
            .add_directive("h2=info".parse()?)
            .add_directive("rustls=info".parse()?)
            .add_directive("hyper=info".parse()?)
            .add_directive("hyper_util=info".parse()?)
            .add_directive("reqwest::connect=info".parse()?)
            .add_directive("mio=info".parse()?)
            .add_directive("want=info".parse()?);
    }
    Ok(filter)
}
pub fn setup_logs(log_level: LogLevel) -> Result<()> {
    color_eyre::install()?;
    LogTracer::init().context("Cannot setup_logs")?;
    let filter = build_env_filter(log_level)?;

    let subscriber = fmt()
        .with_thread_names(true)
        .with_line_number(true)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Cannot setup_logs")?;
    log_panics::init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("detail".parse::<LogLevel>().unwrap().as_level_filter(), LevelFilter::TRACE);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_env_filter_builds_for_every_level() {
        for level in [LogLevel::Off, LogLevel::Info, LogLevel::Detail] {
            build_env_filter(level).unwrap();
        }
    }
}
