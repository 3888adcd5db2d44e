use serde::{Deserialize, Serialize};

use super::{null_default, Entity, RawJson};
use crate::endpoint::Endpoint;

/// A social feed item (news, video, or pulse share).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
    /// Unix time in milliseconds.
    #[serde(deserialize_with = "null_default")]
    pub published_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub user: i64,
    #[serde(deserialize_with = "null_default")]
    pub games: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(rename = "feed_likes_count")]
    #[serde(deserialize_with = "null_default")]
    pub like_count: i64,
    pub feed_video: Option<RawJson>,
    #[serde(deserialize_with = "null_default")]
    pub meta: String,
    #[serde(deserialize_with = "null_default")]
    pub pulse: i64,
    #[serde(deserialize_with = "null_default")]
    pub uid: String,
}

impl Entity for Feed {
    const ENDPOINT: Endpoint = Endpoint::Feeds;
}
