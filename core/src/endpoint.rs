//! The fixed set of API collections.

use std::fmt;

/// One entity collection on the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Characters,
    Collections,
    Companies,
    Credits,
    Engines,
    Feeds,
    Franchises,
    Games,
    GameModes,
    Genres,
    Keywords,
    Pages,
    People,
    Platforms,
    PlayerPerspectives,
    Pulses,
    PulseGroups,
    PulseSources,
    ReleaseDates,
    Reviews,
    Themes,
    Titles,
}

impl Endpoint {
    pub const ALL: [Endpoint; 22] = [
        Endpoint::Characters,
        Endpoint::Collections,
        Endpoint::Companies,
        Endpoint::Credits,
        Endpoint::Engines,
        Endpoint::Feeds,
        Endpoint::Franchises,
        Endpoint::Games,
        Endpoint::GameModes,
        Endpoint::Genres,
        Endpoint::Keywords,
        Endpoint::Pages,
        Endpoint::People,
        Endpoint::Platforms,
        Endpoint::PlayerPerspectives,
        Endpoint::Pulses,
        Endpoint::PulseGroups,
        Endpoint::PulseSources,
        Endpoint::ReleaseDates,
        Endpoint::Reviews,
        Endpoint::Themes,
        Endpoint::Titles,
    ];

    /// Path segment relative to the API root. Always ends in `/`.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Characters => "characters/",
            Endpoint::Collections => "collections/",
            Endpoint::Companies => "companies/",
            Endpoint::Credits => "credits/",
            Endpoint::Engines => "game_engines/",
            Endpoint::Feeds => "feeds/",
            Endpoint::Franchises => "franchises/",
            Endpoint::Games => "games/",
            Endpoint::GameModes => "game_modes/",
            Endpoint::Genres => "genres/",
            Endpoint::Keywords => "keywords/",
            Endpoint::Pages => "pages/",
            Endpoint::People => "people/",
            Endpoint::Platforms => "platforms/",
            Endpoint::PlayerPerspectives => "player_perspectives/",
            Endpoint::Pulses => "pulses/",
            Endpoint::PulseGroups => "pulse_groups/",
            Endpoint::PulseSources => "pulse_sources/",
            Endpoint::ReleaseDates => "release_dates/",
            Endpoint::Reviews => "reviews/",
            Endpoint::Themes => "themes/",
            Endpoint::Titles => "titles/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_are_unique_and_slash_terminated() {
        let mut seen = HashSet::new();
        for endpoint in Endpoint::ALL {
            let path = endpoint.path();
            assert!(path.ends_with('/'), "{endpoint:?}");
            assert!(!path.contains(' '), "{endpoint:?}");
            assert!(seen.insert(path), "duplicate path {path}");
        }
    }

    #[test]
    fn display_drops_trailing_slash() {
        assert_eq!(Endpoint::PlayerPerspectives.to_string(), "player_perspectives");
    }
}
