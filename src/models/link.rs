//! CDN link resolution

use serde::{Deserialize, Serialize};

/// Base URL of the content-delivery host.
const CDN_URL: &str = "https://cdn.listen.moe";

/// CDN namespace a partial asset value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Albums,
    Artists,
    Sources,
}

/// A named absolute URL to a CDN asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    /// Build a link from the partial asset name the gateway delivers.
    /// Absent and empty values resolve to no link at all.
    pub fn from_name(kind: LinkKind, value: Option<&str>) -> Option<Self> {
        let value = value?;
        if value.is_empty() {
            return None;
        }
        let url = match kind {
            LinkKind::Albums => format!("{}/covers/{}", CDN_URL, value),
            LinkKind::Artists => format!("{}/artists/{}", CDN_URL, value),
            LinkKind::Sources => format!("{}/source/{}", CDN_URL, value),
        };
        Some(Link {
            name: value.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_resolve_to_none() {
        assert_eq!(Link::from_name(LinkKind::Albums, None), None);
        assert_eq!(Link::from_name(LinkKind::Artists, Some("")), None);
        assert_eq!(Link::from_name(LinkKind::Sources, Some("")), None);
    }

    #[test]
    fn test_url_template_per_kind() {
        let album = Link::from_name(LinkKind::Albums, Some("a.jpg")).unwrap();
        assert_eq!(album.url, "https://cdn.listen.moe/covers/a.jpg");

        let artist = Link::from_name(LinkKind::Artists, Some("b.png")).unwrap();
        assert_eq!(artist.url, "https://cdn.listen.moe/artists/b.png");

        let source = Link::from_name(LinkKind::Sources, Some("c.jpg")).unwrap();
        assert_eq!(source.url, "https://cdn.listen.moe/source/c.jpg");
    }

    #[test]
    fn test_display_name_equals_value() {
        let link = Link::from_name(LinkKind::Albums, Some("cover.jpg")).unwrap();
        assert_eq!(link.name, "cover.jpg");
    }
}
