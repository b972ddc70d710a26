//! Error types for the storage layer.

/// Errors from key-value store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Key is empty or otherwise unusable
    InvalidKey(String),

    /// Storage backend error
    Backend(String),
}

impl StoreError {
    /// Create a backend error with message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create an invalid key error with message.
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid key: {}", key),
            Self::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::invalid_key("''");
        assert_eq!(err.to_string(), "invalid key: ''");

        let err = StoreError::backend("disk offline");
        assert_eq!(err.to_string(), "storage backend error: disk offline");
    }
}
