//! Process exit codes

/// Successful completion
pub const EXIT_SUCCESS: i32 = 0;

/// Startup or runtime failure
pub const EXIT_ERROR: i32 = 2;
