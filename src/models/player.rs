//! Media-player metadata bridge models
//!
//! The stream player (mpv) surfaces icecast tags and demuxer cache state as
//! loosely-typed dictionaries; these records give them a stable shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::utils::json;

/// Stream metadata captured from one mpv `metadata` update.
///
/// Every tag stays opaque text, including the ones that look numeric
/// (`icy-br`) or boolean (`icy-pub`). The player reports them as strings
/// and no coercion policy is imposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpvData {
    /// Wall-clock instant this metadata was captured.
    pub start: DateTime<Utc>,
    pub track: Option<String>,
    pub genre: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<String>,
    pub date: Option<String>,
    pub album: Option<String>,
    pub comment: Option<String>,
    pub encoder: String,
    pub icy_br: String,
    pub icy_genre: String,
    pub icy_name: String,
    pub icy_pub: String,
    pub icy_url: String,
}

impl MpvData {
    /// Normalize one metadata update. The streaming-encoder tag set is
    /// required; an update without it fails normalization outright.
    pub fn from_metadata(record: &Value) -> Result<Self> {
        Ok(MpvData {
            start: Utc::now(),
            track: json::opt_str(record, "track")?,
            genre: json::opt_str(record, "genre")?,
            title: json::opt_str(record, "title")?,
            artist: json::opt_str(record, "artist")?,
            year: json::opt_str(record, "year")?,
            date: json::opt_str(record, "date")?,
            album: json::opt_str(record, "album")?,
            comment: json::opt_str(record, "comment")?,
            encoder: json::require_str(record, "ENCODER")?,
            icy_br: json::require_str(record, "icy-br")?,
            icy_genre: json::require_str(record, "icy-genre")?,
            icy_name: json::require_str(record, "icy-name")?,
            icy_pub: json::require_str(record, "icy-pub")?,
            icy_url: json::require_str(record, "icy-url")?,
        })
    }
}

/// Demuxer cache state as reported by mpv.
///
/// See <https://mpv.io/manual/master/#command-interface-demuxer-cache-state>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemuxerCacheState {
    /// Total demuxer cache time (seconds).
    pub cache_end: f64,
    /// Amount of cache (seconds).
    pub cache_duration: f64,
    /// Bytes buffered ahead of the current decoding position.
    pub fw_bytes: i64,
    /// Sum of the cached seekable ranges.
    pub total_bytes: i64,
    /// Approximate timestamp of the start of the buffered range.
    pub seekable_start: f64,
    /// Approximate timestamp of the end of the buffered range.
    pub seekable_end: Option<f64>,
}

impl DemuxerCacheState {
    /// Normalize one cache-state property read. Absent numbers default to
    /// -1, the way the player itself reports unknown values.
    pub fn from_value(record: &Value) -> Result<Self> {
        let seekable_end = match json::opt_array(record, "seekable-ranges")? {
            Some(ranges) => match ranges.first() {
                Some(range) => Some(json::opt_f64(range, "end")?.unwrap_or(-1.0)),
                None => None,
            },
            None => None,
        };

        Ok(DemuxerCacheState {
            cache_end: json::opt_f64(record, "cache-end")?.unwrap_or(-1.0),
            cache_duration: json::opt_f64(record, "cache-duration")?.unwrap_or(-1.0),
            fw_bytes: json::opt_i64(record, "fw-bytes")?.unwrap_or(-1),
            total_bytes: json::opt_i64(record, "total-bytes")?.unwrap_or(-1),
            seekable_start: json::opt_f64(record, "reader-pts")?.unwrap_or(-1.0),
            seekable_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use serde_json::json;

    fn tags() -> Value {
        json!({
            "title": "Song Title",
            "artist": "Artist",
            "ENCODER": "Liquidsoap",
            "icy-br": "128",
            "icy-genre": "Various",
            "icy-name": "Radio",
            "icy-pub": "0",
            "icy-url": "https://listen.moe",
        })
    }

    #[test]
    fn test_metadata_normalizes() {
        let data = MpvData::from_metadata(&tags()).unwrap();
        assert_eq!(data.title.as_deref(), Some("Song Title"));
        assert_eq!(data.icy_br, "128");
        assert_eq!(data.track, None);
    }

    #[test]
    fn test_missing_encoder_tag_fails() {
        let mut value = tags();
        value.as_object_mut().unwrap().remove("ENCODER");
        assert_eq!(
            MpvData::from_metadata(&value),
            Err(ParseError::MissingField("ENCODER"))
        );
    }

    #[test]
    fn test_cache_state_defaults_to_minus_one() {
        let state = DemuxerCacheState::from_value(&json!({})).unwrap();
        assert_eq!(state.cache_end, -1.0);
        assert_eq!(state.cache_duration, -1.0);
        assert_eq!(state.fw_bytes, -1);
        assert_eq!(state.total_bytes, -1);
        assert_eq!(state.seekable_start, -1.0);
        assert_eq!(state.seekable_end, None);
    }

    #[test]
    fn test_cache_state_reads_first_seekable_range() {
        let record = json!({
            "cache-end": 12.5,
            "cache-duration": 10.0,
            "fw-bytes": 4096,
            "total-bytes": 8192,
            "reader-pts": 2.5,
            "seekable-ranges": [{"start": 0.0, "end": 12.5}, {"start": 20.0, "end": 30.0}],
        });
        let state = DemuxerCacheState::from_value(&record).unwrap();
        assert_eq!(state.cache_end, 12.5);
        assert_eq!(state.fw_bytes, 4096);
        assert_eq!(state.seekable_end, Some(12.5));
    }

    #[test]
    fn test_cache_state_rejects_non_numeric_values() {
        let record = json!({"cache-end": "lots"});
        assert!(matches!(
            DemuxerCacheState::from_value(&record),
            Err(ParseError::MalformedValue {
                field: "cache-end",
                ..
            })
        ));
    }
}
