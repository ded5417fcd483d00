//! Process exit codes, BSD `sysexits` style where one applies.

/// Successful termination
pub const SUCCESS: i32 = 0;

/// Any failure without a more specific code: bad arguments, storage errors, ...
pub const USAGE: i32 = 64;

/// The URL is already stored
pub const DUP: i32 = 65;

/// The user declined a confirmation prompt
pub const CANCEL: i32 = 130;
