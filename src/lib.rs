//! Client-side data model for the LISTEN.moe radio service
//!
//! The service's REST and websocket surfaces deliver loosely-typed JSON
//! records for songs, artists, albums, characters and sources; the local
//! stream player adds its own metadata dictionaries on top. This crate turns
//! all of them into one consistent set of typed entities and derives the
//! display strings and links a front end needs: sanitized titles, preferred
//! localized/romanized names, voice-actor credits, CDN image links.
//!
//! The crate owns no transport. Callers (a websocket client, an HTTP client,
//! a player bridge) hand it decoded [`serde_json::Value`] records and receive
//! normalized entities back; every normalization is a pure, synchronous
//! transformation safe to call from any thread.

pub mod error;
pub mod models;
pub mod utils;

pub use error::{ParseError, Result};
pub use models::*;
