//! Builds and queries a full-text index over the post records a static blog
//! generator writes to its search store.

pub mod config;
pub mod constants;
pub mod error;
pub mod inverted_index;
pub mod search;
pub mod store;
pub mod tokenizer;

pub use config::{FieldWeights, IndexConfig};
pub use error::{Error, Result};
pub use inverted_index::{Field, IndexBuilder, InvertedIndex};
pub use search::{SearchEngine, SearchResult};
pub use store::{load_store, parse_store, Document};
