//! Small naming entities that share one record shape.

use serde::{Deserialize, Serialize};

use super::{null_default, Entity};
use crate::endpoint::Endpoint;

macro_rules! taxonomy_entity {
    ($(#[$meta:meta])* $name:ident => $endpoint:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
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
            pub games: Vec<i64>,
        }

        impl Entity for $name {
            const ENDPOINT: Endpoint = Endpoint::$endpoint;
        }
    };
}

taxonomy_entity!(
    /// A game genre such as "Shooter".
    Genre => Genres
);
taxonomy_entity!(
    /// A thematic tag such as "Horror".
    Theme => Themes
);
taxonomy_entity!(Keyword => Keywords);
taxonomy_entity!(
    /// Single player, multiplayer, co-op and so on.
    GameMode => GameModes
);
taxonomy_entity!(PlayerPerspective => PlayerPerspectives);
