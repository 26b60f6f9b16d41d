use crate::{CliError, CliResult};

use mf_config::LogLevel;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Install the fern logger.
///
/// Stdout is reserved for command output, so records go to stderr unless a
/// log file is configured. Colors apply to stderr only.
pub fn initialize(level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let formatted = Dispatch::new().format(move |out, message, record| {
        let date = humantime::format_rfc3339_seconds(SystemTime::now());
        match colors {
            Some(colors) => out.finish(format_args!(
                "[{date} - {}] {message} [{}:{}]",
                colors.color(record.level()),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            )),
            None => out.finish(format_args!(
                "[{date} - {}] {message} [{}:{}]",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            )),
        }
    });

    let target = match log_file {
        Some(ref path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::logger(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CliError::logger(format!("cannot open {}: {e}", path.display())))?;
            formatted.chain(file)
        }
        None => formatted.chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level.0)
        .chain(target)
        .apply()
        .map_err(|e| CliError::logger(e.to_string()))?;

    debug!(
        "Logger initialized: level={}, target={}",
        level.0,
        log_file
            .as_ref()
            .map_or_else(|| "stderr".to_string(), |p| p.display().to_string())
    );
    Ok(())
}
