//! Transport trait definition.
//!
//! This module defines the request/response exchange shared by every
//! resource. The transport owns everything below the JSON payload: the base
//! URL, authentication headers, connection reuse and timeouts.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ClientError;

/// HTTP verbs used by the service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// A request to the service, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute path with already-encoded segments, e.g. `/indexes/movies`.
    pub path: String,
    /// Query-string pairs, not yet encoded.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append query-string pairs.
    pub fn with_query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange with the service.
///
/// Implementations must only fail for transport-level reasons (connection,
/// timeout, unreadable body). Non-success statuses are returned as a normal
/// [`HttpResponse`] and mapped to errors by the client.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so one transport can back
/// clients used across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpResponse)` - Whatever status the service answered with
    /// * `Err(ClientError::TransportError)` - If no response could be obtained
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
