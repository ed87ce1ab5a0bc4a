//! # Meili Client Shared
//!
//! Plain request and response records exchanged with the search service.
//! Every type mirrors a resource of the remote API and serializes with the
//! service's camelCase field names. None of them carry client-side state.

pub mod document;
pub mod index;
pub mod keys;
pub mod schema;
pub mod search;
pub mod settings;
pub mod stats;
pub mod synonyms;
pub mod system;
pub mod update;

pub use document::ListDocumentsRequest;
pub use index::{CreateIndexRequest, CreateIndexResponse, Index, UpdateIndexRequest};
pub use keys::{Acl, ApiKey, CreateApiKeyRequest, UpdateApiKeyRequest};
pub use schema::{RawAttribute, RawSchema, Schema, SchemaAttribute};
pub use search::{SearchRequest, SearchResponse};
pub use settings::Settings;
pub use stats::{GlobalStats, IndexStats, Stats};
pub use synonyms::{BatchCreateSynonymsRequest, ListSynonymsResponse};
pub use system::{
    GlobalSystemInfo, GlobalSystemInfoPretty, ProcessInfo, ProcessInfoPretty, SystemInformation,
    SystemInformationPretty, Version,
};
pub use update::{Update, UpdateIdResponse, UpdateState, UpdateStatus, UpdateType};
