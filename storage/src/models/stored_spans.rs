//! Versioned JSON envelope for spans in the `signature_spans` column.
//!
//! Format: `{"version": 1, "spans": [{"kind": "bold", "offset": 6, "length": 5}, ...]}`.

use rich_text::Span;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Current span schema version written by this crate.
pub const SPAN_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct StoredSpans {
    pub version: u32,
    pub spans: Vec<Span>,
}

impl StoredSpans {
    /// Serialises spans with the current schema version.
    pub fn encode(spans: &[Span]) -> Result<String, StorageError> {
        let envelope = StoredSpans {
            version: SPAN_SCHEMA_VERSION,
            spans: spans.to_vec(),
        };
        serde_json::to_string(&envelope).map_err(|e| StorageError::Schema(e.to_string()))
    }

    /// Parses a stored envelope; rejects versions this build does not understand.
    pub fn decode(raw: &str) -> Result<Vec<Span>, StorageError> {
        let envelope: StoredSpans =
            serde_json::from_str(raw).map_err(|e| StorageError::Schema(e.to_string()))?;
        if envelope.version != SPAN_SCHEMA_VERSION {
            return Err(StorageError::Schema(format!(
                "unsupported span schema version {} (expected {})",
                envelope.version, SPAN_SCHEMA_VERSION
            )));
        }
        Ok(envelope.spans)
    }
}
