//! The persisted state record

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::Result;

/// A single key/value record, the sole persisted entity.
///
/// `key` identifies the record and must be non-empty; `value` is an opaque
/// string and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub key: String,
    pub value: String,
}

impl State {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check the record against the store's preconditions.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(StoreError::Validation("key cannot be empty".to_string()));
        }
        Ok(())
    }
}
