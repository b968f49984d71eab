mod loader;
mod record;

pub use self::{
    loader::{load_store, parse_store},
    record::{strip_markup, Document, RawRecord},
};
