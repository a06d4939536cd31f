//! Song model and display derivation

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    join_names, primary_image, Album, Artist, Character, CharacterId, Named, SongId, Source,
    SITE_URL,
};
use crate::error::Result;
use crate::utils::{json, text};

/// One song as delivered by the gateway, fully normalized.
///
/// Sub-entities are owned by the song that contains them; two songs never
/// share records even when they refer to the same catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    /// Sanitized title in the original script.
    pub title: Option<String>,
    /// Latin-script title, carried through as delivered.
    pub title_romaji: Option<String>,
    pub sources: Vec<Source>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub characters: Vec<Character>,
    /// Play length in seconds, when the gateway knows it.
    pub duration: Option<i64>,
    /// Unix timestamp at which the current play is expected to end. Read
    /// from the wall clock at normalization time, never carried over from a
    /// previous record.
    pub time_end: i64,
    /// Preview clip path, when one exists.
    pub snippet: Option<String>,
    /// Times this song has been played on the station.
    pub played: Option<i64>,
    /// Site page for this song, derived from the id at construction.
    pub link: String,
}

impl Song {
    /// Normalize one raw song record.
    ///
    /// Only the id is required; every other field degrades to absent when
    /// the record omits it.
    pub fn from_value(record: &Value) -> Result<Self> {
        let id = SongId(json::require_i64(record, "id")?);
        let duration = json::opt_i64(record, "duration")?;
        let time_end = Utc::now().timestamp() + duration.unwrap_or(0);

        Ok(Song {
            id,
            title: json::opt_str(record, "title")?.map(|s| text::sanitize(&s)),
            title_romaji: json::opt_str(record, "titleRomaji")?,
            sources: collect(record, "sources", Source::from_value)?,
            artists: collect(record, "artists", Artist::from_value)?,
            albums: collect(record, "albums", Album::from_value)?,
            characters: collect(record, "characters", Character::from_value)?,
            duration,
            time_end,
            snippet: json::opt_str(record, "snippet")?,
            played: json::opt_i64(record, "played")?,
            link: format!("{}/songs/{}", SITE_URL, id),
        })
    }

    /// Display title under the given preference order.
    pub fn format_title(&self, romaji_first: bool) -> Option<&str> {
        if romaji_first {
            self.title_romaji.as_deref().or(self.title.as_deref())
        } else {
            self.title.as_deref().or(self.title_romaji.as_deref())
        }
    }

    /// Joined artist credit line.
    ///
    /// An artist with a voice role that resolves against the song's character
    /// list is credited as `"Character (CV: Artist)"`; anyone else appears by
    /// bare name. Artists with no resolvable name contribute nothing. Absent
    /// when the song credits no artists at all.
    pub fn format_artists(&self, romaji_first: bool, sep: &str) -> Option<String> {
        if self.artists.is_empty() {
            return None;
        }

        // One lookup table for the whole walk, not one per artist.
        let characters_by_id: HashMap<CharacterId, &Character> =
            self.characters.iter().map(|c| (c.id, c)).collect();

        let mut parts: Vec<String> = Vec::new();
        for artist in &self.artists {
            let Some(name) = artist.display_name(romaji_first) else {
                continue;
            };

            // The first placeholder that resolves decides the credit. A
            // resolved character without a usable name falls back to the
            // bare artist name.
            let voiced = artist
                .characters
                .iter()
                .find_map(|placeholder| characters_by_id.get(&placeholder.id))
                .and_then(|character| character.display_name(romaji_first));

            match voiced {
                Some(character) => parts.push(format!("{} (CV: {})", character, name)),
                None => parts.push(name.to_string()),
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(sep))
        }
    }

    /// Joined source titles.
    pub fn format_sources(&self, romaji_first: bool, sep: &str) -> Option<String> {
        join_names(&self.sources, romaji_first, sep)
    }

    /// Joined album titles.
    pub fn format_albums(&self, romaji_first: bool, sep: &str) -> Option<String> {
        join_names(&self.albums, romaji_first, sep)
    }

    /// URL of the leading artist's portrait.
    pub fn artist_image(&self) -> Option<&str> {
        primary_image(&self.artists, true)
    }

    /// URL of the leading album's cover.
    pub fn album_image(&self) -> Option<&str> {
        primary_image(&self.albums, true)
    }

    /// URL of the leading source's icon.
    pub fn source_image(&self) -> Option<&str> {
        primary_image(&self.sources, true)
    }
}

fn collect<T>(
    record: &Value,
    key: &'static str,
    normalize: impl Fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    match json::opt_array(record, key)? {
        Some(entries) => entries.iter().map(normalize).collect(),
        None => Ok(Vec::new()),
    }
}
