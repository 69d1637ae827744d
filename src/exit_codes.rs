/// Exit code: success.
pub const SUCCESS: i32 = 0;

/// Exit code: runtime error (output could not be rendered, etc.).
pub const RUNTIME_ERROR: i32 = 1;

/// Exit code: usage / input error (unknown name, malformed hex, invalid args).
pub const USAGE_ERROR: i32 = 2;

/// Exit code: the value decoded to no known reply status.
pub const UNKNOWN_STATUS: i32 = 3;
