//! Artist model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ArtistId, Character, CharacterId, Illustrated, Link, LinkKind, Named, SITE_URL};
use crate::error::Result;
use crate::utils::{json, text};

/// An artist credited on a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    /// Name in the original script.
    pub name: Option<String>,
    /// Latin-script transliteration.
    pub name_romaji: Option<String>,
    /// CDN portrait, when the gateway names one.
    pub image: Option<Link>,
    /// Id-only placeholders for the characters this artist voices on the
    /// song; empty when the artist voices none. Enriched against the song's
    /// character list at display time.
    pub characters: Vec<Character>,
    /// Site page for this artist, derived from the id at construction.
    pub link: String,
}

impl Artist {
    /// Normalize one raw artist record.
    pub fn from_value(record: &Value) -> Result<Self> {
        let id = ArtistId(json::require_i64(record, "id")?);

        let mut characters = Vec::new();
        if let Some(entries) = json::opt_array(record, "characters")? {
            for entry in entries {
                characters.push(Character::new(CharacterId(json::require_i64(entry, "id")?)));
            }
        }

        Ok(Artist {
            id,
            name: json::opt_str(record, "name")?.map(|s| text::sanitize(&s)),
            name_romaji: json::opt_str(record, "nameRomaji")?.map(|s| text::sanitize(&s)),
            image: Link::from_name(
                LinkKind::Artists,
                json::opt_str(record, "image")?.as_deref(),
            ),
            characters,
            link: format!("{}/artists/{}", SITE_URL, id),
        })
    }
}

impl Named for Artist {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_romaji(&self) -> Option<&str> {
        self.name_romaji.as_deref()
    }
}

impl Illustrated for Artist {
    fn image(&self) -> Option<&Link> {
        self.image.as_ref()
    }
}
