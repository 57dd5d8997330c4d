//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Range   | Domain    | Description                              |
//! |---------|-----------|------------------------------------------|
//! | 0       | Universal | Success                                  |
//! | 1       | Universal | General error (unspecified)              |
//! | 2       | Universal | CLI usage error (bad args, missing file) |
//! | 20-29   | snapshot  | Session snapshot codes                   |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Snapshot (20-29)
// =============================================================================

/// Snapshot file missing or unreadable.
pub const EXIT_SNAPSHOT_NOT_FOUND: u8 = 20;

/// Snapshot file exists but is not valid JSON.
pub const EXIT_SNAPSHOT_MALFORMED: u8 = 21;

/// Snapshot loaded but one or more stored values failed validation.
pub const EXIT_SNAPSHOT_INVALID: u8 = 22;

use fjordviz_config::session::SessionError;

/// Map a SessionError to its exit code.
pub fn session_exit_code(err: &SessionError) -> u8 {
    match err {
        SessionError::Io(_) => EXIT_SNAPSHOT_NOT_FOUND,
        SessionError::Parse(_) => EXIT_SNAPSHOT_MALFORMED,
    }
}
