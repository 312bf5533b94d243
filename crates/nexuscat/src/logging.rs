//! Diagnostic logging
//!
//! All diagnostics go to stderr through `tracing`; stdout carries only
//! category data.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    #[default]
    Normal,
    /// Request URLs and statuses
    Verbose,
}

impl LogLevel {
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "nexuscat=error,nexus_common=error",
            LogLevel::Normal => "nexuscat=info,nexus_common=info",
            LogLevel::Verbose => "nexuscat=debug,nexus_common=debug",
        }
    }
}

/// Pick the filter: explicit flags win, then RUST_LOG, then the default
pub fn filter_directive(level: LogLevel, rust_log: Option<String>) -> String {
    match (level, rust_log) {
        (LogLevel::Normal, Some(env)) if !env.trim().is_empty() => env,
        (level, _) => level.directive().to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: LogLevel) {
    let directive = filter_directive(level, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::Normal.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
