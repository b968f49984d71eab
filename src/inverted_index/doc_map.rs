use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::store::Document;

pub type DocID = u64;
pub type TF = u32;
pub type TFIDF = f64;

/// Documents in insertion order; a [`DocID`] is the position in this list.
pub type DocMap = Vec<Document>;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocID,
    /// Field-weighted occurrence count.
    pub tf: TF,
    pub tf_idf: TFIDF,
    pub fields: BTreeSet<Field>,
}

impl Posting {
    pub const fn new(doc_id: DocID) -> Self {
        Self {
            doc_id,
            tf: 0,
            tf_idf: 0.0,
            fields: BTreeSet::new(),
        }
    }
}
