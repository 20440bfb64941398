//! Optional log4rs backend for the `log` output of the conversions.
//!
//! Settings come from the environment (a `.env` file is loaded first):
//! - `IP_TOOLS_LOG_CONFIG` - log4rs YAML file, default `log4rs.yml`
//! - `IP_TOOLS_LOG_LEVEL` - console level used when that file is missing, default `warn`

use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILE: &str = "log4rs.yml";
pub const ENV_CONFIG_FILE: &str = "IP_TOOLS_LOG_CONFIG";
pub const ENV_LEVEL: &str = "IP_TOOLS_LOG_LEVEL";

/// Where to read the log config from and the fallback console level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub config_file: String,
    pub level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            level: LevelFilter::Warn,
        }
    }
}

impl LogSettings {
    /// Read settings from `.env` and the process environment.
    pub fn from_env() -> LogSettings {
        dotenv::dotenv().ok();
        LogSettings::from_vars(
            std::env::var(ENV_CONFIG_FILE).ok(),
            std::env::var(ENV_LEVEL).ok(),
        )
    }

    /// Build settings from raw variable values; unknown levels fall back to the default.
    pub fn from_vars(config_file: Option<String>, level: Option<String>) -> LogSettings {
        let default = LogSettings::default();
        LogSettings {
            config_file: config_file
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(default.config_file),
            level: level
                .and_then(|l| LevelFilter::from_str(l.trim()).ok())
                .unwrap_or(default.level),
        }
    }
}

/// Initialize log4rs from the environment settings.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    init_logging_with(&LogSettings::from_env())
}

/// Initialize log4rs from `settings.config_file`, or a console logger if it is missing.
///
/// Fails if a logger is already installed.
pub fn init_logging_with(settings: &LogSettings) -> Result<(), Box<dyn Error>> {
    if Path::new(&settings.config_file).exists() {
        log4rs::init_file(&settings.config_file, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.config_file
            )
        })?;
        log::info!("Logging configured from {}", settings.config_file);
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(settings.level))?;
    log4rs::init_config(config)?;
    log::warn!(
        "Log config {} not found, console logging at {}",
        settings.config_file.on_blue(),
        settings.level
    );
    Ok(())
}
