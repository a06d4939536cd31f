//! Activity feed entries and play history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Song;
use crate::error::{ParseError, Result};
use crate::utils::json;

/// One entry of an account's activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFeed {
    /// Type code as sent by the service.
    pub feed_type: i64,
    /// Creation timestamp, carried verbatim as delivered.
    pub created_at: String,
    /// The song the entry is about. Some entry types come without one.
    pub song: Option<Song>,
}

impl SystemFeed {
    /// Normalize one raw feed entry.
    pub fn from_value(record: &Value) -> Result<Self> {
        Ok(SystemFeed {
            feed_type: json::require_i64(record, "type")?,
            created_at: json::require_text(record, "createdAt")?,
            song: match json::get(record, "song") {
                Some(song) => Some(Song::from_value(song)?),
                None => None,
            },
        })
    }

    /// Human label for the type code.
    pub fn activity(&self) -> &'static str {
        match self.feed_type {
            2 => "Favorited",
            4 => "Uploaded",
            _ => "",
        }
    }
}

/// One entry of the station-wide play history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStatistics {
    pub created_at: DateTime<Utc>,
    pub song: Song,
}

impl PlayStatistics {
    /// Normalize one raw play-history record.
    pub fn from_value(record: &Value) -> Result<Self> {
        Ok(PlayStatistics {
            created_at: millis_to_utc(record, "createdAt")?,
            song: Song::from_value(json::require(record, "song")?)?,
        })
    }
}

/// Parse a millisecond unix timestamp delivered as a string or a number.
fn millis_to_utc(record: &Value, key: &'static str) -> Result<DateTime<Utc>> {
    let raw = json::require_text(record, key)?;
    let millis: i64 = raw.trim().parse().map_err(|_| {
        ParseError::malformed(key, format!("expected a millisecond timestamp, got `{}`", raw))
    })?;
    let seconds = (millis as f64 / 1000.0).round() as i64;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ParseError::malformed(key, format!("timestamp out of range: {}", millis)))
}
