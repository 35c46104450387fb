/// Tagged console logging
///
/// Colorized, timestamped log lines in the form `HH:MM:SS [TAG] [EVENT] msg`.
/// Debug lines are suppressed unless enabled via `--debug` at startup.

use chrono::Local;
use colored::*;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug-level output. Called once from the CLI layer.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Wallet,
    Stake,
    Rpc,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Wallet => "WALLET",
            LogTag::Stake => "STAKE",
            LogTag::Rpc => "RPC",
        }
    }

    fn colored_label(&self) -> ColoredString {
        match self {
            LogTag::System => self.as_str().green().bold(),
            LogTag::Wallet => self.as_str().blue().bold(),
            LogTag::Stake => self.as_str().magenta().bold(),
            LogTag::Rpc => self.as_str().bright_green().bold(),
        }
    }
}

/// Log a tagged event line.
pub fn log(tag: LogTag, event: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    println!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        tag.colored_label(),
        format_event(event),
        message
    );
    let _ = io::stdout().flush();
}

/// Log a debug line; dropped unless `--debug` was passed.
pub fn debug(tag: LogTag, message: &str) {
    if is_debug_enabled() {
        let time = Local::now().format("%H:%M:%S").to_string();
        println!(
            "{} [{}] [{}] {}",
            time.dimmed(),
            tag.colored_label(),
            "DEBUG".purple(),
            message.dimmed()
        );
        let _ = io::stdout().flush();
    }
}

fn format_event(event: &str) -> ColoredString {
    match event {
        "ERROR" => event.red().bold(),
        "WARN" => event.yellow().bold(),
        "SUCCESS" => event.green().bold(),
        "START" | "FINISH" => event.cyan().bold(),
        _ => event.normal(),
    }
}
