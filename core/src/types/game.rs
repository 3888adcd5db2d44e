use serde::{Deserialize, Serialize};

use super::{null_default, Entity, Image, RawJson, Reference, Summary, Video};
use crate::endpoint::Endpoint;

/// An alternative title, e.g. a regional name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AltName {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub comment: String,
}

/// Time to beat a game, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatTime {
    /// Spelled this way by the API.
    #[serde(deserialize_with = "null_default")]
    pub hastly: i64,
    #[serde(deserialize_with = "null_default")]
    pub normally: i64,
    #[serde(deserialize_with = "null_default")]
    pub completely: i64,
}

/// Entertainment Software Rating Board rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Esrb {
    #[serde(deserialize_with = "null_default")]
    pub rating: i32,
    #[serde(deserialize_with = "null_default")]
    pub synopsis: String,
}

/// Pan European Game Information rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pegi {
    #[serde(deserialize_with = "null_default")]
    pub rating: i32,
    #[serde(deserialize_with = "null_default")]
    pub synopsis: String,
}

/// IDs on external services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct External {
    #[serde(deserialize_with = "null_default")]
    pub steam: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Website {
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// A release of a game on one platform in one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub platform: i64,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub date: i64,
    #[serde(deserialize_with = "null_default")]
    pub region: i32,
    #[serde(deserialize_with = "null_default")]
    pub human: String,
    #[serde(deserialize_with = "null_default")]
    pub y: i32,
    #[serde(deserialize_with = "null_default")]
    pub m: i32,
}

/// A game record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_default")]
    pub storyline: String,
    pub collection: Option<Reference<Summary>>,
    pub franchise: Option<Reference<Summary>>,
    #[serde(deserialize_with = "null_default")]
    pub franchises: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub hypes: i64,
    #[serde(deserialize_with = "null_default")]
    pub popularity: f64,
    #[serde(deserialize_with = "null_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_default")]
    pub rating_count: i64,
    #[serde(rename = "aggregated_rating")]
    #[serde(deserialize_with = "null_default")]
    pub aggregate_rating: f64,
    #[serde(rename = "aggregated_rating_count")]
    #[serde(deserialize_with = "null_default")]
    pub aggregate_rating_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_rating: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_rating_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub weighted_rating: f64,
    /// Parent game, for DLCs and expansions.
    #[serde(deserialize_with = "null_default")]
    pub game: i64,
    #[serde(deserialize_with = "null_default")]
    pub developers: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub publishers: Vec<i64>,
    #[serde(rename = "game_engines")]
    #[serde(deserialize_with = "null_default")]
    pub engines: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub time_to_beat: BeatTime,
    #[serde(deserialize_with = "null_default")]
    pub player_perspectives: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub game_modes: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub keywords: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub themes: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub genres: Vec<i64>,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub first_release_date: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: i32,
    #[serde(deserialize_with = "null_default")]
    pub release_dates: Vec<ReleaseDate>,
    #[serde(deserialize_with = "null_default")]
    pub alternative_names: Vec<AltName>,
    #[serde(deserialize_with = "null_default")]
    pub screenshots: Vec<Image>,
    #[serde(deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    #[serde(deserialize_with = "null_default")]
    pub cover: Image,
    #[serde(deserialize_with = "null_default")]
    pub esrb: Esrb,
    #[serde(deserialize_with = "null_default")]
    pub pegi: Pegi,
    #[serde(deserialize_with = "null_default")]
    pub websites: Vec<Website>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub dlcs: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub expansions: Vec<i64>,
    #[serde(rename = "standalone_expansions")]
    #[serde(deserialize_with = "null_default")]
    pub standalone: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub bundles: Vec<i64>,
    #[serde(rename = "games")]
    #[serde(deserialize_with = "null_default")]
    pub similar_games: Vec<i64>,
    pub follows: Option<i64>,
    pub pulse_count: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub external: External,
    pub multiplayer_modes: Option<RawJson>,
}

impl Entity for Game {
    const ENDPOINT: Endpoint = Endpoint::Games;
}
