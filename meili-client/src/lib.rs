//! # Meili Client
//!
//! Async client for the search service's HTTP API. It includes definitions
//! for errors, the `Transport` interface every request goes through, and a
//! concrete implementation on top of `reqwest`.
//!
//! Mutating operations are applied asynchronously by the service and return
//! an [`UpdateIdResponse`](types::UpdateIdResponse); use
//! [`UpdatesApi::wait_for`] to block until the update is processed.

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod resources;

#[cfg(test)]
mod test_support;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_HOST};
pub use errors::ClientError;
pub use http::{HttpTransport, API_KEY_HEADER};
pub use interfaces::{HttpRequest, HttpResponse, Method, Transport};
pub use resources::{
    DocumentsApi, HealthApi, IndexesApi, KeysApi, SearchApi, SettingsApi, StatsApi, StopWordsApi,
    SynonymsApi, SystemInfoApi, UpdatesApi, VersionApi,
};

pub use meili_client_shared as types;
