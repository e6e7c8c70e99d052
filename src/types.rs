//! Shared primitive identifier and timestamp aliases.

/// Monotonic item identifier, never reused after deletion.
pub type ItemId = u64;
/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;
