/// Job and order identifiers are caller-supplied strings (`"ORD-1001"`,
/// `"RWK-ORD-1001-01"`).
pub type JobId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
