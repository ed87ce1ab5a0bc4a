//! Resource handles.
//!
//! One handle per resource category of the service. Each handle borrows the
//! [`Client`](crate::Client), builds requests from its arguments and decodes
//! the typed response; none of them hold state between calls.

mod documents;
mod health;
mod indexes;
mod keys;
mod search;
mod settings;
mod stats;
mod stop_words;
mod synonyms;
mod system_info;
mod updates;
mod version;

pub use documents::DocumentsApi;
pub use health::HealthApi;
pub use indexes::IndexesApi;
pub use keys::KeysApi;
pub use search::SearchApi;
pub use settings::SettingsApi;
pub use stats::StatsApi;
pub use stop_words::StopWordsApi;
pub use synonyms::SynonymsApi;
pub use system_info::SystemInfoApi;
pub use updates::UpdatesApi;
pub use version::VersionApi;
