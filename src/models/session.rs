//! Websocket frame payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{Event, Requester, Song};
use crate::error::{ParseError, Result};
use crate::utils::json;

/// One live update frame from the gateway: what plays now, who requested
/// it, and the recent play history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayUpdate {
    /// Gateway operation code.
    pub op: i64,
    /// Frame type tag.
    pub t: String,
    /// When the current play started.
    pub start_time: DateTime<Utc>,
    pub listeners: i64,
    pub requester: Option<Requester>,
    pub event: Option<Event>,
    pub song: Song,
    /// Prior plays in delivered order, most recent first. Not deduplicated.
    pub last_played: Vec<Song>,
}

impl GatewayUpdate {
    /// Normalize one raw gateway frame.
    pub fn from_value(frame: &Value) -> Result<Self> {
        let op = json::require_i64(frame, "op")?;
        let t = json::require_str(frame, "t")?;
        let data = json::require(frame, "d")?;

        let raw_start = json::require_str(data, "startTime")?;
        let start_time = DateTime::parse_from_rfc3339(&raw_start)
            .map_err(|e| {
                ParseError::malformed(
                    "startTime",
                    format!("`{}` is not a valid timestamp: {}", raw_start, e),
                )
            })?
            .with_timezone(&Utc);

        let song = Song::from_value(json::require(data, "song")?)?;

        let history = json::opt_array(data, "lastPlayed")?
            .ok_or(ParseError::MissingField("lastPlayed"))?;
        let mut last_played = Vec::with_capacity(history.len());
        for entry in history {
            last_played.push(Song::from_value(entry)?);
        }

        debug!(op, t = %t, song = %song.id, "normalized gateway update");

        Ok(GatewayUpdate {
            op,
            t,
            start_time,
            listeners: json::require_i64(data, "listeners")?,
            requester: Requester::from_value(json::get(data, "requester"))?,
            event: Event::from_value(json::get(data, "event"))?,
            song,
            last_played,
        })
    }
}
