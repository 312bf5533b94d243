//! Exit codes for nexuscat

/// Exit code when NEXUS_API_KEY is missing or empty
pub const EXIT_MISSING_CREDENTIAL: i32 = 1;

/// Exit code for unhandled errors (fallback request failed, bad config, ...)
pub const EXIT_GENERAL_ERROR: i32 = 1;
