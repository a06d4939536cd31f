//! Station event model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::utils::json;

/// A station-wide event (a special broadcast, an anniversary stream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: String,
    /// Presence text shown while the event runs.
    pub presence: Option<String>,
}

impl Event {
    /// Normalize an optional event sub-record. Absent input is not an error.
    pub fn from_value(record: Option<&Value>) -> Result<Option<Self>> {
        let Some(record) = record else {
            return Ok(None);
        };
        Ok(Some(Event {
            id: json::require_str(record, "id")?,
            name: json::require_str(record, "name")?,
            slug: json::require_str(record, "slug")?,
            image: json::require_str(record, "image")?,
            presence: json::opt_str(record, "presence")?,
        }))
    }
}
