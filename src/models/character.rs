//! Character model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CharacterId, Named, SITE_URL};
use crate::error::Result;
use crate::utils::{json, text};

/// A character voiced on a song. Characters carry no image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// Name in the original script.
    pub name: Option<String>,
    /// Latin-script transliteration.
    pub name_romaji: Option<String>,
    /// Site page for this character, derived from the id at construction.
    pub link: String,
}

impl Character {
    /// An id-only placeholder, used where an artist record references a
    /// character without its names. Resolved against the song's own
    /// character list at display time.
    pub fn new(id: CharacterId) -> Self {
        Character {
            id,
            name: None,
            name_romaji: None,
            link: format!("{}/characters/{}", SITE_URL, id),
        }
    }

    /// Normalize one raw character record.
    pub fn from_value(record: &Value) -> Result<Self> {
        let id = CharacterId(json::require_i64(record, "id")?);
        Ok(Character {
            id,
            name: json::opt_str(record, "name")?.map(|s| text::sanitize(&s)),
            name_romaji: json::opt_str(record, "nameRomaji")?.map(|s| text::sanitize(&s)),
            link: format!("{}/characters/{}", SITE_URL, id),
        })
    }
}

impl Named for Character {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_romaji(&self) -> Option<&str> {
        self.name_romaji.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_has_id_and_link_only() {
        let character = Character::new(CharacterId(12));
        assert_eq!(character.name, None);
        assert_eq!(character.name_romaji, None);
        assert_eq!(character.link, "https://listen.moe/characters/12");
    }

    #[test]
    fn test_both_names_are_sanitized() {
        let record = json!({
            "id": 5,
            "name": "ホ\u{309A}ニョ",
            "nameRomaji": "Po\u{200B}nyo",
        });
        let character = Character::from_value(&record).unwrap();
        assert_eq!(character.name.unwrap(), "ホ\u{309C}ニョ");
        assert_eq!(character.name_romaji.unwrap(), "Ponyo");
    }
}
