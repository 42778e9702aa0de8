/// Record identifiers are opaque strings (UUIDv7 text in practice).
pub type EntityId = String;

/// Optimistic-lock version counter carried by mutable records.
pub type Version = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
