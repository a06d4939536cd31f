//! Source model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Illustrated, Link, LinkKind, Named, SourceId, SITE_URL};
use crate::error::Result;
use crate::utils::{json, text};

/// The work a song originates from (an anime, a game, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    /// Name in the original script.
    pub name: Option<String>,
    /// Latin-script transliteration, carried through as delivered.
    pub name_romaji: Option<String>,
    /// CDN icon, when the gateway names one.
    pub image: Option<Link>,
    /// Site page for this source, derived from the id at construction.
    pub link: String,
}

impl Source {
    /// Normalize one raw source record.
    pub fn from_value(record: &Value) -> Result<Self> {
        let id = SourceId(json::require_i64(record, "id")?);
        Ok(Source {
            id,
            name: json::opt_str(record, "name")?.map(|s| text::sanitize(&s)),
            name_romaji: json::opt_str(record, "nameRomaji")?,
            image: Link::from_name(
                LinkKind::Sources,
                json::opt_str(record, "image")?.as_deref(),
            ),
            link: format!("{}/sources/{}", SITE_URL, id),
        })
    }
}

impl Named for Source {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_romaji(&self) -> Option<&str> {
        self.name_romaji.as_deref()
    }
}

impl Illustrated for Source {
    fn image(&self) -> Option<&Link> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use serde_json::json;

    #[test]
    fn test_name_is_sanitized_romaji_is_not() {
        let record = json!({
            "id": 3,
            "name": "ウ\u{3099}ィッチ",
            "nameRomaji": "Wi\u{200B}tch",
        });
        let source = Source::from_value(&record).unwrap();
        let name = source.name.unwrap();
        assert!(name.contains('\u{309B}'));
        assert!(!name.contains('\u{3099}'));
        // the romanized form is carried through untouched
        assert_eq!(source.name_romaji.unwrap(), "Wi\u{200B}tch");
    }

    #[test]
    fn test_id_only_record() {
        let source = Source::from_value(&json!({"id": 7})).unwrap();
        assert_eq!(source.id, SourceId(7));
        assert_eq!(source.name, None);
        assert_eq!(source.name_romaji, None);
        assert_eq!(source.image, None);
        assert_eq!(source.link, "https://listen.moe/sources/7");
    }

    #[test]
    fn test_missing_id_fails() {
        assert_eq!(
            Source::from_value(&json!({"name": "x"})),
            Err(ParseError::MissingField("id"))
        );
    }

    #[test]
    fn test_image_resolves_against_cdn() {
        let record = json!({"id": 1, "image": "show-icon.jpg"});
        let source = Source::from_value(&record).unwrap();
        assert_eq!(
            source.image.unwrap().url,
            "https://cdn.listen.moe/source/show-icon.jpg"
        );
    }
}
