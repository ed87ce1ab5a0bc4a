//! Interface definitions for the search client.
//!
//! This module defines the abstract `Transport` trait every resource
//! delegates to, allowing the HTTP backend to be swapped for a fake in tests.

mod transport;

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
