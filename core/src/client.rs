//! Entity accessors over the IGDB REST API.
//!
//! # Design
//! `Client` holds the URL root, the API key and a shared `Transport`; it has
//! no per-call state, so one instance can serve concurrent callers. Each
//! accessor is the same three steps: build a URL (which validates IDs and
//! options before anything is sent), execute it, and parse the response with
//! one of the `parse_*` functions below. `Service<T>` binds those accessors
//! to one entity type and its endpoint.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::options::Options;
use crate::transport::{check_status, decode_json, Transport, UreqTransport};
use crate::types::{Entity, Feed, Game, GameMode, Genre, Keyword, PlayerPerspective, Pulse, Theme};
use crate::url::UrlBuilder;

/// Shared entry point for every entity service.
#[derive(Clone)]
pub struct Client {
    urls: UrlBuilder,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("root", &self.urls.root())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// A client that talks HTTP through `ureq`.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config.timeout))
    }

    pub fn with_transport(config: &ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            urls: UrlBuilder::new(&config.base_url),
            api_key: config.api_key.clone(),
            transport: Arc::new(transport),
        }
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Accessors for any entity type.
    pub fn service<T: Entity>(&self) -> Service<'_, T> {
        Service {
            client: self,
            _entity: PhantomData,
        }
    }

    pub fn games(&self) -> Service<'_, Game> {
        self.service()
    }

    pub fn feeds(&self) -> Service<'_, Feed> {
        self.service()
    }

    pub fn pulses(&self) -> Service<'_, Pulse> {
        self.service()
    }

    pub fn genres(&self) -> Service<'_, Genre> {
        self.service()
    }

    pub fn themes(&self) -> Service<'_, Theme> {
        self.service()
    }

    pub fn keywords(&self) -> Service<'_, Keyword> {
        self.service()
    }

    pub fn game_modes(&self) -> Service<'_, GameMode> {
        self.service()
    }

    pub fn player_perspectives(&self) -> Service<'_, PlayerPerspective> {
        self.service()
    }

    /// Field names the API exposes for `endpoint`, sorted.
    pub fn endpoint_fields(&self, endpoint: Endpoint) -> Result<Vec<String>> {
        let url = self.urls.meta(endpoint)?;
        parse_fields(&self.fetch(url)?)
    }

    fn fetch(&self, url: String) -> Result<HttpResponse> {
        let request = HttpRequest::get(url, &self.api_key);
        self.transport.execute(&request)
    }
}

/// Typed accessors for one entity kind.
pub struct Service<'c, T> {
    client: &'c Client,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Service<'_, T> {
    /// Fetch one entity by ID.
    pub fn get(&self, id: i64, options: &Options) -> Result<T> {
        let url = self.client.urls.single(T::ENDPOINT, id, options)?;
        let items: Vec<T> = parse_list(&self.client.fetch(url)?)?;
        items.into_iter().next().ok_or(Error::NoResults)
    }

    /// Fetch several entities by ID. Order follows the server's response.
    pub fn list(&self, ids: &[i64], options: &Options) -> Result<Vec<T>> {
        if ids.is_empty() {
            return Err(Error::EmptyIds);
        }
        let url = self.client.urls.multi(T::ENDPOINT, ids, options)?;
        parse_list(&self.client.fetch(url)?)
    }

    /// List entities constrained only by `options`.
    pub fn index(&self, options: &Options) -> Result<Vec<T>> {
        let url = self.client.urls.index(T::ENDPOINT, options)?;
        parse_list(&self.client.fetch(url)?)
    }

    pub fn search(&self, query: &str, options: &Options) -> Result<Vec<T>> {
        let url = self.client.urls.search(T::ENDPOINT, query, options)?;
        parse_list(&self.client.fetch(url)?)
    }

    /// Number of entities matching the filters in `options`.
    pub fn count(&self, options: &Options) -> Result<i64> {
        let url = self.client.urls.count(T::ENDPOINT, options)?;
        parse_count(&self.client.fetch(url)?)
    }

    /// Field names available on this endpoint, sorted.
    pub fn fields(&self) -> Result<Vec<String>> {
        self.client.endpoint_fields(T::ENDPOINT)
    }
}

#[derive(Deserialize)]
struct CountBody {
    count: i64,
}

/// Decode a list of entities; an empty list is `NoResults`.
pub(crate) fn parse_list<T: Entity>(response: &HttpResponse) -> Result<Vec<T>> {
    check_status(response)?;
    let items: Vec<T> = decode_json(response)?;
    if items.is_empty() {
        let endpoint = T::ENDPOINT;
        tracing::trace!(%endpoint, "no results");
        return Err(Error::NoResults);
    }
    Ok(items)
}

/// Decode `{"count": n}`. A bare `[]` is `NoResults`, not zero.
pub(crate) fn parse_count(response: &HttpResponse) -> Result<i64> {
    check_status(response)?;
    match decode_json::<Value>(response)? {
        Value::Array(items) if items.is_empty() => Err(Error::NoResults),
        value => serde_json::from_value::<CountBody>(value)
            .map(|body| body.count)
            .map_err(|e| Error::InvalidJson(e.to_string())),
    }
}

/// Decode a list of field names. An empty list is a valid answer.
pub(crate) fn parse_fields(response: &HttpResponse) -> Result<Vec<String>> {
    check_status(response)?;
    let mut fields: Vec<String> = decode_json(response)?;
    fields.sort();
    Ok(fields)
}
