#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store is inaccessible (I/O failure, quota, poisoned
    /// lock). Fatal to the operation that hit it -- callers surface this
    /// instead of reporting success.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored document exists but does not decode to its expected shape.
    #[error("Stored document '{name}' is corrupt")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A document failed to serialize before writing.
    #[error("Failed to encode document '{name}'")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
