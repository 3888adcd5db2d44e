//! HTTP requests and responses as plain data.
//!
//! # Design
//! The client describes each call as an `HttpRequest` and interprets the
//! `HttpResponse` it gets back, while a `Transport` does the actual I/O in
//! between. Keeping both sides as owned data makes every accessor testable
//! against canned responses without a socket.

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "user-key";

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// A GET for `url` carrying the credential and JSON `Accept` headers.
    pub fn get(url: String, api_key: &str) -> Self {
        Self {
            url,
            headers: vec![
                (API_KEY_HEADER.to_string(), api_key.to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
