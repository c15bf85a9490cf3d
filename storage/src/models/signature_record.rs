//! Signature record model.
//!
//! One row of the `channel_signatures` table after its spans have been decoded.

use chrono::{DateTime, Utc};
use rich_text::{RichText, Span};
use serde::{Deserialize, Serialize};

/// A channel's signature and the admin who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// Telegram user id of the owning admin.
    pub admin_id: i64,
    /// Telegram chat id of the channel (`-100…`).
    pub channel_id: i64,
    /// Signature text as the admin sent it.
    pub text: String,
    /// Formatting of `text`, offsets in UTF-16 units.
    pub spans: Vec<Span>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
}

impl SignatureRecord {
    /// Creates a record stamped with the current time.
    pub fn new(admin_id: i64, channel_id: i64, text: String, spans: Vec<Span>) -> Self {
        Self {
            admin_id,
            channel_id,
            text,
            spans,
            updated_at: Utc::now(),
        }
    }

    /// The signature as a mergeable fragment.
    pub fn rich_text(&self) -> RichText {
        RichText::new(self.text.clone(), self.spans.clone())
    }

    pub fn is_owned_by(&self, admin_id: i64) -> bool {
        self.admin_id == admin_id
    }
}
