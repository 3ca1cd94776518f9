// Colorized wrappers for logging

use colored::Colorize;
use fern::Dispatch;
use log::{Level, SetLoggerError};

#[inline(always)]
pub(crate) fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S").to_string();
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::error!(target: "retrobind", "{}", message.bright_red());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::info!(target: "retrobind", "{message}");
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::debug!(target: "retrobind", "{}", message.dimmed());
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::warn!(target: "retrobind", "{}", message.bright_yellow());
    }
}

/// Records of the library crates get the same timestamp as the macros above.
fn format_library_record(level: Level, target: &str, message: &str) -> String {
    let line = format_log(&format!("{target}: {message}"));
    match level {
        Level::Error => line.bright_red().to_string(),
        Level::Warn => line.bright_yellow().to_string(),
        Level::Info => line,
        Level::Debug | Level::Trace => line.dimmed().to_string(),
    }
}

/// Setup the logger.
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn setup(verbose: bool, no_color: bool) -> Result<(), SetLoggerError> {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    if no_color {
        colored::control::set_override(false);
    }

    Dispatch::new()
        .format(|out, message, record| {
            if record.target() == "retrobind" {
                out.finish(*message);
            } else {
                out.finish(format_args!(
                    "{}",
                    format_library_record(record.level(), record.target(), &message.to_string())
                ));
            }
        })
        .level(log::LevelFilter::Warn)
        .level_for("retrobind", log_level)
        .level_for("retrobind_gamecontrollerdb", log_level)
        .level_for("retrobind_device", log_level)
        .level_for("retrobind_resolve", log_level)
        .level_for("retrobind_workspace", log_level)
        .chain(std::io::stderr())
        .apply()
}
