//! Album model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AlbumId, Illustrated, Link, LinkKind, Named, SITE_URL};
use crate::error::Result;
use crate::utils::{json, text};

/// An album a song appears on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    /// Name in the original script.
    pub name: Option<String>,
    /// Latin-script transliteration, carried through as delivered.
    pub name_romaji: Option<String>,
    /// CDN cover art, when the gateway names one.
    pub image: Option<Link>,
    /// Site page for this album, derived from the id at construction.
    pub link: String,
}

impl Album {
    /// Normalize one raw album record.
    pub fn from_value(record: &Value) -> Result<Self> {
        let id = AlbumId(json::require_i64(record, "id")?);
        Ok(Album {
            id,
            name: json::opt_str(record, "name")?.map(|s| text::sanitize(&s)),
            name_romaji: json::opt_str(record, "nameRomaji")?,
            image: Link::from_name(
                LinkKind::Albums,
                json::opt_str(record, "image")?.as_deref(),
            ),
            link: format!("{}/albums/{}", SITE_URL, id),
        })
    }
}

impl Named for Album {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_romaji(&self) -> Option<&str> {
        self.name_romaji.as_deref()
    }
}

impl Illustrated for Album {
    fn image(&self) -> Option<&Link> {
        self.image.as_ref()
    }
}
