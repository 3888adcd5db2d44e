//! Entity DTOs returned by the API.
//!
//! # Design
//! Every field defaults when absent because field selection (`fields=`)
//! makes the server return partial records. Entities carry no behavior
//! beyond the `Entity` link to their endpoint.
//!
//! An explicit `null` decodes to the field's default, same as a missing key.
//!
//! Fields whose JSON shape varies are typed explicitly: `Reference<T>` for
//! "bare id or expanded object", `RawJson` for payloads with no fixed shape.

mod feed;
mod game;
mod pulse;
mod taxonomy;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::endpoint::Endpoint;

pub use feed::Feed;
pub use game::{AltName, BeatTime, Esrb, External, Game, Pegi, ReleaseDate, Website};
pub use pulse::{Pulse, PulseVideo};
pub use taxonomy::{GameMode, Genre, Keyword, PlayerPerspective, Theme};

/// A decodable record tied to the endpoint that serves it.
pub trait Entity: DeserializeOwned {
    const ENDPOINT: Endpoint;
}

pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A related record that is either a bare ID or the expanded object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(i64),
    Expanded(T),
}

impl<T> Reference<T> {
    /// The bare ID, if the reference was not expanded.
    pub fn id(&self) -> Option<i64> {
        match self {
            Reference::Id(id) => Some(*id),
            Reference::Expanded(_) => None,
        }
    }

    pub fn expanded(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Expanded(value) => Some(value),
        }
    }
}

/// JSON kept verbatim, decoded on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawJson(Box<RawValue>);

impl RawJson {
    pub fn get(&self) -> &str {
        self.0.get()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.0.get())
    }
}

impl PartialEq for RawJson {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for RawJson {}

/// Minimal shape of an expanded collection or franchise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// An image hosted by the API's CDN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub cloudinary_id: String,
    #[serde(deserialize_with = "null_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_default")]
    pub height: i64,
}

/// A named video; `id` is the YouTube slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "video_id")]
    #[serde(deserialize_with = "null_default")]
    pub id: String,
}
