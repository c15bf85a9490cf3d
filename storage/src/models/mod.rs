//! Data models for storage (signature records and the span envelope).

mod signature_record;
mod stored_spans;

pub use signature_record::SignatureRecord;
pub use stored_spans::{StoredSpans, SPAN_SCHEMA_VERSION};
