//! Typed blocking client for the IGDB video-game metadata API.
//!
//! # Overview
//! Builds request URLs for single-entity lookups, ID-list lookups, listing,
//! search, counts and field introspection, executes them through a
//! `Transport`, and decodes the JSON into entity structs.
//!
//! # Design
//! - `Options` collects field selection, filters, ordering and paging, and is
//!   validated once when a URL is built.
//! - `UrlBuilder` validates IDs and lays out paths; nothing reaches the
//!   network if either validation fails.
//! - `Transport` is the I/O seam. `UreqTransport` is the default; tests plug
//!   in canned responses.
//! - `Client` hands out a `Service<T>` per entity type, all funneling through
//!   the same parse functions so error classification is uniform.
//!
//! ```no_run
//! use igdb_core::{Client, ClientConfig, Direction, Options};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(&ClientConfig::from_env()?);
//! let games = client
//!     .games()
//!     .search("zelda", &Options::new().fields(["name", "rating"]).order("rating", Direction::Desc).limit(5))?;
//! for game in games {
//!     println!("{} ({:.1})", game.name, game.rating);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;
pub mod types;
pub mod url;

pub use client::{Client, Service};
pub use config::{ClientConfig, ConfigError};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use http::{HttpRequest, HttpResponse};
pub use options::{Direction, Filter, Operator, Options, Order, Query, QueryOption};
pub use transport::{Transport, UreqTransport};
pub use types::{Entity, Feed, Game, GameMode, Genre, Keyword, PlayerPerspective, Pulse, RawJson, Reference, Theme};
pub use url::UrlBuilder;
