//! Executing requests and turning bodies into typed values.
//!
//! `Transport` is the only place that touches the network. Status
//! classification and JSON decoding live here too so that every accessor
//! reports failures the same way.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and hands back the raw response.
///
/// Implementations must return non-2xx responses as data; `Client` decides
/// what a status means.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds each call end to end; `None` leaves ureq's defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(url = %request.url, "GET");

        let mut builder = self.agent.get(request.url.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let bytes = response.body_mut().read_to_vec()?;
        tracing::debug!(url = %request.url, status, bytes = bytes.len(), "response");

        let body = body_text(status, bytes)?;
        Ok(HttpResponse { status, headers, body })
    }
}

/// Success bodies must be UTF-8 JSON; error bodies are kept for display only.
fn body_text(status: u16, bytes: Vec<u8>) -> Result<String> {
    if !(200..300).contains(&status) {
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }
    String::from_utf8(bytes).map_err(|e| Error::InvalidJson(e.to_string()))
}

/// Map non-2xx responses to `Error::HttpStatus`.
pub(crate) fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(status = response.status, "request failed");
    Err(Error::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Decode the body into `T`. Empty and malformed bodies are both `InvalidJson`.
pub(crate) fn decode_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if response.body.trim().is_empty() {
        return Err(Error::InvalidJson("empty body".to_string()));
    }
    serde_json::from_str(&response.body).map_err(|e| Error::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn check_status_accepts_2xx() {
        assert!(check_status(&HttpResponse::new(200, "[]")).is_ok());
    }

    #[test]
    fn check_status_keeps_status_and_body() {
        let err = check_status(&HttpResponse::new(403, "forbidden")).unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 403, ref body } if body == "forbidden"));
    }

    #[test]
    fn non_utf8_success_body_is_invalid_json() {
        let err = body_text(200, b"[\xff\xfe]".to_vec()).unwrap_err();
        assert!(matches!(err, Error::InvalidJson(_)));
    }

    #[test]
    fn non_utf8_error_body_is_kept_lossily() {
        let body = body_text(502, b"bad \xff gateway".to_vec()).unwrap();
        assert_eq!(body, "bad \u{fffd} gateway");
    }

    #[test]
    fn decode_empty_body_is_invalid_json() {
        for body in ["", "   ", "\n"] {
            let err = decode_json::<Vec<Named>>(&HttpResponse::new(200, body)).unwrap_err();
            assert!(matches!(err, Error::InvalidJson(_)), "{body:?}");
        }
    }

    #[test]
    fn decode_malformed_body_is_invalid_json() {
        let err = decode_json::<Vec<Named>>(&HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, Error::InvalidJson(_)));
    }

    #[test]
    fn decode_valid_list() {
        let named: Vec<Named> = decode_json(&HttpResponse::new(200, r#"[{"name":"Portal"}]"#)).unwrap();
        assert_eq!(
            named,
            vec![Named {
                name: "Portal".to_string()
            }]
        );
    }

    #[test]
    fn decode_empty_array_is_not_an_error() {
        let named: Vec<Named> = decode_json(&HttpResponse::new(200, "[]")).unwrap();
        assert!(named.is_empty());
    }
}
