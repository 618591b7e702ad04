use colored::Colorize;
use std::fmt;
use std::sync::RwLock;

use once_cell::sync::Lazy;

/// Output preferences toggled by CLI flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub quiet_mode: bool,
    pub plain_mode: bool,
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

pub fn section(title: impl fmt::Display) {
    let prefs = preferences();
    if prefs.quiet_mode {
        return;
    }
    let line = format!("=== {} ===", title);
    if prefs.plain_mode {
        println!("{line}");
    } else {
        println!("{}", line.bold());
    }
}

pub fn info(message: impl fmt::Display) {
    if preferences().quiet_mode {
        return;
    }
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    if preferences().plain_mode {
        println!("{message}");
    } else {
        println!("{}", message.to_string().green());
    }
}

pub fn warning(message: impl fmt::Display) {
    if preferences().plain_mode {
        eprintln!("warning: {message}");
    } else {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }
}

pub fn error_line(message: impl fmt::Display) {
    if preferences().plain_mode {
        eprintln!("error: {message}");
    } else {
        eprintln!("{} {message}", "error:".red().bold());
    }
}
