//! User account models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SystemFeed, SITE_URL};
use crate::error::Result;
use crate::utils::json;

/// The listener who requested the current song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    pub uuid: String,
    pub username: String,
    pub display_name: String,
    /// Profile page, derived from the username at construction.
    pub link: String,
}

impl Requester {
    /// Normalize an optional requester sub-record. Absent input is not an
    /// error; a present record must carry the full identity.
    pub fn from_value(record: Option<&Value>) -> Result<Option<Self>> {
        let Some(record) = record else {
            return Ok(None);
        };
        let username = json::require_str(record, "username")?;
        let link = format!("{}/u/{}", SITE_URL, username);
        Ok(Some(Requester {
            uuid: json::require_str(record, "uuid")?,
            username,
            display_name: json::require_str(record, "displayName")?,
            link,
        }))
    }
}

/// A listener account as returned by the profile queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub username: String,
    pub display_name: String,
    /// Profile text, kept as the raw markdown the service stores.
    pub bio: Option<String>,
    pub favorites: i64,
    pub uploads: i64,
    pub requests: i64,
    /// Recent activity feed entries for this account.
    pub feeds: Vec<SystemFeed>,
    /// Profile page, derived from the username at construction.
    pub link: String,
}

impl User {
    /// Normalize one raw user record.
    pub fn from_value(record: &Value) -> Result<Self> {
        let username = json::require_str(record, "username")?;
        let link = format!("{}/u/{}", SITE_URL, username);

        let mut feeds = Vec::new();
        if let Some(entries) = json::opt_array(record, "systemFeed")? {
            for entry in entries {
                feeds.push(SystemFeed::from_value(entry)?);
            }
        }

        Ok(User {
            uuid: json::require_str(record, "uuid")?,
            username,
            display_name: json::require_str(record, "displayName")?,
            bio: json::opt_str(record, "bio")?,
            favorites: count_of(record, "favorites")?,
            uploads: count_of(record, "uploads")?,
            requests: count_of(record, "requests")?,
            feeds,
            link,
        })
    }
}

/// The authenticated account, with its session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

impl CurrentUser {
    pub fn from_value(record: &Value, token: impl Into<String>) -> Result<Self> {
        Ok(CurrentUser {
            user: User::from_value(record)?,
            token: token.into(),
        })
    }
}

// The service wraps counters as `{ "count": n }` objects.
fn count_of(record: &Value, key: &'static str) -> Result<i64> {
    match json::get(record, key) {
        Some(counter) => Ok(json::opt_i64(counter, "count")?.unwrap_or(0)),
        None => Ok(0),
    }
}
