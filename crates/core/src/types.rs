/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque JSON payload relayed between the database and the client.
pub type JsonPayload = serde_json::Value;
