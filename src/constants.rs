//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SANDBOX DEFAULTS
// =============================================================================

/// Default Judge0 base URL (self-hosted instance)
pub const DEFAULT_JUDGE0_URL: &str = "http://localhost:2358";

/// Wall-clock deadline for one sandbox execution, in seconds.
/// Judge0 blocks server-side with `wait=true`; past this deadline the call
/// resolves to an unavailable error rather than hanging grading forever.
pub const DEFAULT_EXECUTION_DEADLINE_SECS: u64 = 30;

/// Timeout for the sandbox health probe, in seconds
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// CONTENT API DEFAULTS
// =============================================================================

/// Default content API base URL
pub const DEFAULT_CONTENT_API_URL: &str = "http://localhost:8081/api/v1";

/// Timeout for content API reads, in seconds
pub const CONTENT_API_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Judge0 language identifiers supported by the platform
pub mod languages {
    pub const C: i32 = 50; // GCC 9.2.0
    pub const CPP: i32 = 54; // GCC 9.2.0
    pub const JAVA: i32 = 62; // OpenJDK 13.0.1
    pub const JAVASCRIPT: i32 = 63; // Node.js 12.14.0
    pub const PYTHON: i32 = 71; // Python 3.8.1
    pub const SQL: i32 = 82; // SQLite 3.27.2

    /// All supported language identifiers
    pub const ALL: &[i32] = &[C, CPP, JAVA, JAVASCRIPT, PYTHON, SQL];
}

/// Judge0 status identifiers (as reported in `status.id`)
pub mod judge0_status {
    pub const IN_QUEUE: i32 = 1;
    pub const PROCESSING: i32 = 2;
    pub const ACCEPTED: i32 = 3;
    pub const WRONG_ANSWER: i32 = 4;
    pub const TIME_LIMIT_EXCEEDED: i32 = 5;
    pub const COMPILATION_ERROR: i32 = 6;
    /// 7..=12 cover the SIGSEGV/SIGXFSZ/SIGFPE/SIGABRT/NZEC runtime errors
    pub const RUNTIME_ERROR_FIRST: i32 = 7;
    pub const RUNTIME_ERROR_LAST: i32 = 12;
    pub const INTERNAL_ERROR: i32 = 13;
    pub const EXEC_FORMAT_ERROR: i32 = 14;
}

// =============================================================================
// EXERCISE DEFAULTS
// =============================================================================

/// Point value assumed when an exercise does not specify one
pub const DEFAULT_EXERCISE_POINTS: i32 = 100;

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status strings (must match the DB CHECK constraint)
pub mod statuses {
    pub const ACCEPTED: &str = "accepted";
    pub const WRONG_ANSWER: &str = "wrong_answer";
    /// Every test case failed on sandbox infrastructure, not learner code
    pub const EXECUTION_FAILED: &str = "execution_failed";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: usize = 1024 * 1024;

/// Maximum stdin size for an ungraded run in bytes (64 KB)
pub const MAX_RUN_STDIN_SIZE: usize = 64 * 1024;
