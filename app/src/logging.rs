//! FILENAME: app/src/logging.rs
// PURPOSE: Unified log line format for the dashboard process.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use env_logger::{Builder, Env};
use log::{Level, Record};

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter for log lines
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Single-letter level tag used in the unified format.
pub fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

/// `seq|level|category|message`, where category is the crate that logged.
pub fn format_line(seq: u64, record: &Record<'_>) -> String {
    let category = record.target().split("::").next().unwrap_or("");
    format!("{}|{}|{}|{}", seq, level_tag(record.level()), category, record.args())
}

/// Installs the logger on stderr so stdout carries only the report.
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(level: &str) {
    let result = Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "{}", format_line(next_seq(), record)))
        .try_init();

    if let Err(e) = result {
        eprintln!("[LOG_WARN] Logger already initialized: {}", e);
    }
}
