//! Data models for the LISTEN.moe service
//!
//! Every record here is an immutable value: normalized once from a raw JSON
//! record, never mutated afterward. Site links and other derived fields are
//! filled in at construction time.

mod album;
mod artist;
mod character;
mod event;
mod feed;
mod link;
mod player;
mod session;
mod song;
mod source;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use character::Character;
pub use event::Event;
pub use feed::{PlayStatistics, SystemFeed};
pub use link::{Link, LinkKind};
pub use player::{DemuxerCacheState, MpvData};
pub use session::GatewayUpdate;
pub use song::Song;
pub use source::Source;
pub use user::{CurrentUser, Requester, User};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base URL for user-facing pages on the site.
pub(crate) const SITE_URL: &str = "https://listen.moe";

/// Album identifier. Ids are scoped per entity kind; equal numbers across
/// kinds do not refer to the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlbumId(pub i64);

/// Artist identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtistId(pub i64);

/// Character identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub i64);

/// Song identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SongId(pub i64);

/// Source identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(pub i64);

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An entity carrying a localized and/or romanized name.
pub trait Named {
    fn name(&self) -> Option<&str>;
    fn name_romaji(&self) -> Option<&str>;

    /// Human-facing name under the given preference order, falling back to
    /// the other script when the preferred one is absent.
    fn display_name(&self, romaji_first: bool) -> Option<&str> {
        if romaji_first {
            self.name_romaji().or_else(|| self.name())
        } else {
            self.name().or_else(|| self.name_romaji())
        }
    }
}

/// An entity that may carry a CDN image link.
pub trait Illustrated {
    fn image(&self) -> Option<&Link>;
}

/// Image name or URL for a list of entities.
///
/// Only the leading entry is consulted: when it lacks an image the result is
/// absent even if a later entry has one.
pub fn primary_image<T: Illustrated>(items: &[T], want_url: bool) -> Option<&str> {
    let link = items.first()?.image()?;
    Some(if want_url { &link.url } else { &link.name })
}

/// Join the display names of a list, skipping entries with no resolvable
/// name. Absent when the list is empty or nothing resolves.
pub(crate) fn join_names<T: Named>(items: &[T], romaji_first: bool, sep: &str) -> Option<String> {
    let parts: Vec<&str> = items
        .iter()
        .filter_map(|item| item.display_name(romaji_first))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(sep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_requested_script() {
        let source = Source {
            id: SourceId(1),
            name: Some("ソース".to_string()),
            name_romaji: Some("Soosu".to_string()),
            image: None,
            link: String::new(),
        };
        assert_eq!(source.display_name(true), Some("Soosu"));
        assert_eq!(source.display_name(false), Some("ソース"));
    }

    #[test]
    fn test_display_name_falls_back_to_other_script() {
        let source = Source {
            id: SourceId(1),
            name: None,
            name_romaji: Some("Soosu".to_string()),
            image: None,
            link: String::new(),
        };
        assert_eq!(source.display_name(false), Some("Soosu"));

        let source = Source {
            id: SourceId(1),
            name: Some("ソース".to_string()),
            name_romaji: None,
            image: None,
            link: String::new(),
        };
        assert_eq!(source.display_name(true), Some("ソース"));
    }

    #[test]
    fn test_primary_image_stops_at_leading_gap() {
        let albums = vec![
            Album {
                id: AlbumId(1),
                name: None,
                name_romaji: None,
                image: None,
                link: String::new(),
            },
            Album {
                id: AlbumId(2),
                name: None,
                name_romaji: None,
                image: Link::from_name(LinkKind::Albums, Some("cover.jpg")),
                link: String::new(),
            },
        ];
        assert_eq!(primary_image(&albums, true), None);
    }

    #[test]
    fn test_primary_image_returns_name_or_url() {
        let albums = vec![Album {
            id: AlbumId(1),
            name: None,
            name_romaji: None,
            image: Link::from_name(LinkKind::Albums, Some("cover.jpg")),
            link: String::new(),
        }];
        assert_eq!(primary_image(&albums, false), Some("cover.jpg"));
        assert_eq!(
            primary_image(&albums, true),
            Some("https://cdn.listen.moe/covers/cover.jpg")
        );
        assert_eq!(primary_image::<Album>(&[], true), None);
    }
}
