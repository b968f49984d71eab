mod engine;
mod query;
mod search_result;

pub use self::{
    engine::SearchEngine,
    query::{Clause, Presence, Query},
    search_result::SearchResult,
};
