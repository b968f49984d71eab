//! In-memory inverted index over blog post records.
//!
//! Terms are normalized by [`Tokenizer`] and map to the postings of every
//! document whose title, excerpt, categories or tags contain them.

mod builder;
mod doc_map;
mod export;
mod field;

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
};

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use self::{
    builder::IndexBuilder,
    doc_map::{DocID, DocMap, Posting, TF, TFIDF},
    field::Field,
};
use crate::{
    config::IndexConfig,
    error::{Error, Result},
    store::Document,
    tokenizer::Tokenizer,
};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(try_from = "IndexData")]
pub struct InvertedIndex {
    config: IndexConfig,
    docs: DocMap,
    terms: BTreeMap<String, Vec<Posting>>,
    #[serde(skip_serializing)]
    tokenizer: Tokenizer,
}

/// Serialized form of [`InvertedIndex`]; the tokenizer is rebuilt from the config.
#[derive(Deserialize)]
struct IndexData {
    config: IndexConfig,
    docs: DocMap,
    terms: BTreeMap<String, Vec<Posting>>,
}

impl TryFrom<IndexData> for InvertedIndex {
    type Error = Error;

    fn try_from(data: IndexData) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(data.config.stem)?,
            config: data.config,
            docs: data.docs,
            terms: data.terms,
        })
    }
}

impl InvertedIndex {
    /// Indexes `documents` in order, skipping (and logging) any the builder rejects.
    pub fn from_documents<I>(config: IndexConfig, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut builder = IndexBuilder::new(config)?;

        for document in documents {
            let title = document.title.clone();
            if let Err(e) = builder.add(document) {
                warn!(title = %title, "Skipping document: {e}");
            }
        }

        Ok(builder.build())
    }

    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Tokenizer that produced the indexed terms; queries must go through it too.
    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Urls of the documents containing `term`, normalized like indexed text.
    pub fn lookup(&self, term: &str) -> BTreeSet<&str> {
        self.postings(&self.tokenizer.normalize(term.trim()))
            .iter()
            .filter_map(|posting| self.document(posting.doc_id))
            .map(|document| document.url.as_str())
            .collect()
    }

    /// Postings of an already normalized term.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.terms.get(term).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Indexed terms starting with `prefix`, in lexical order.
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Every indexed term with its document frequency.
    pub fn terms(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.len()))
    }

    pub fn document(&self, doc_id: DocID) -> Option<&Document> {
        usize::try_from(doc_id)
            .ok()
            .and_then(|position| self.docs.get(position))
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
