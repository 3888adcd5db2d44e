use serde::{Deserialize, Serialize};

use super::{null_default, Entity, Image};
use crate::endpoint::Endpoint;

/// A video attached to a pulse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseVideo {
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
}

/// A news article pulled from a pulse source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pulse {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub pulse_source: i64,
    #[serde(deserialize_with = "null_default")]
    pub category: i32,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub uid: String,
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
    pub image: String,
    pub pulse_image: Option<Image>,
    #[serde(deserialize_with = "null_default")]
    pub videos: Vec<PulseVideo>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
}

impl Entity for Pulse {
    const ENDPOINT: Endpoint = Endpoint::Pulses;
}
