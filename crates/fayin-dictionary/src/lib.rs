pub mod loader;
pub mod search;
pub mod store;
pub mod types;

pub use loader::{DatasetSource, LoadError};
pub use search::search;
pub use store::{DatasetStore, ReadyOutcome};
pub use types::{Dataset, Entry, PronunciationRecord, RecordSet, SearchResult};
