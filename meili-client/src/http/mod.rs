//! HTTP implementation of the transport.
//!
//! This module provides the concrete implementation of `Transport`
//! on top of `reqwest`.

mod transport;

pub use transport::{HttpTransport, API_KEY_HEADER};
