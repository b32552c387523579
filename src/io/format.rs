//! Nice xtalsym output formatting.

use std::fmt;

use log;

const XTALSYM_BANNER_LENGTH: usize = 80;

/// Logs an error to the `xtalsym-output` logger.
#[allow(unused_macros)]
macro_rules! xtalsym_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "xtalsym-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `xtalsym-output` logger.
#[allow(unused_macros)]
macro_rules! xtalsym_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "xtalsym-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `xtalsym-output` logger.
macro_rules! xtalsym_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "xtalsym-output", $fmt, $($($arg)*)?); }
}

#[allow(unused_imports)]
pub(crate) use {xtalsym_error, xtalsym_output, xtalsym_warn};

/// Logs a nicely formatted section title to the `xtalsym-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(XTALSYM_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    xtalsym_output!("┌──{bar}──┐");
    xtalsym_output!("│§ {title:^length$} §│");
    xtalsym_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `xtalsym-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    xtalsym_output!("{}", subtitle);
    xtalsym_output!("{}", bar);
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging `xtalsym` outputs nicely.
pub(crate) trait XtalsymOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            xtalsym_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> XtalsymOutput for T where T: fmt::Debug + fmt::Display {}
