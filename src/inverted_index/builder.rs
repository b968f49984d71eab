use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info};

use super::{
    doc_map::{DocID, DocMap, Posting, TF},
    field::Field,
    InvertedIndex,
};
use crate::{
    config::IndexConfig,
    error::{Error, Result},
    store::Document,
    tokenizer::Tokenizer,
};

/// Single-pass builder: add documents, then [`IndexBuilder::build`] scores the postings.
pub struct IndexBuilder {
    config: IndexConfig,
    tokenizer: Tokenizer,
    docs: DocMap,
    urls: HashSet<String>,
    terms: BTreeMap<String, Vec<Posting>>,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(config.stem)?,
            config,
            docs: DocMap::new(),
            urls: HashSet::new(),
            terms: BTreeMap::new(),
        })
    }

    pub fn add(&mut self, mut document: Document) -> Result<DocID> {
        document.url = document.url.trim().to_string();

        if document.url.is_empty() {
            return Err(Error::MissingUrl);
        }
        if self.urls.contains(&document.url) {
            return Err(Error::DuplicateUrl(document.url));
        }

        let doc_id = self.docs.len() as DocID;
        let mut word_count: HashMap<String, Posting> = HashMap::new();

        for field in Field::ALL {
            let weight = self.config.weights.weight(field);
            if weight == 0 {
                continue;
            }

            update_word_count(
                document.field_text(field),
                &self.tokenizer,
                &mut word_count,
                doc_id,
                field,
                weight,
            );
        }

        debug!(doc_id, url = %document.url, terms = word_count.len(), "Indexed document");

        for (word, posting) in word_count {
            self.terms.entry(word).or_default().push(posting);
        }

        self.urls.insert(document.url.clone());
        self.docs.push(document);

        Ok(doc_id)
    }

    pub fn build(mut self) -> InvertedIndex {
        calculate_scores(&mut self.terms, self.docs.len());

        info!(
            documents = self.docs.len(),
            terms = self.terms.len(),
            "Built inverted index"
        );

        InvertedIndex {
            config: self.config,
            docs: self.docs,
            terms: self.terms,
            tokenizer: self.tokenizer,
        }
    }
}

fn update_word_count(
    texts: Vec<&str>,
    tokenizer: &Tokenizer,
    word_count: &mut HashMap<String, Posting>,
    doc_id: DocID,
    field: Field,
    weight: TF,
) {
    texts
        .iter()
        .map(|text| tokenizer.tokenize(text))
        .for_each(|tokens| {
            tokens.into_iter().for_each(|token| {
                let posting = word_count
                    .entry(token)
                    .or_insert_with(|| Posting::new(doc_id));
                posting.tf += weight;
                posting.fields.insert(field);
            });
        });
}

fn calculate_scores(terms: &mut BTreeMap<String, Vec<Posting>>, num_docs: usize) {
    for postings in terms.values_mut() {
        let df = postings.len();

        for posting in postings.iter_mut() {
            posting.tf_idf = calculate_tf_idf(f64::from(posting.tf), df as f64, num_docs as f64);
        }
    }
}

fn calculate_tf_idf(tf: f64, df: f64, n: f64) -> f64 {
    (1.0 + tf.log10()) * (n / df).log10()
}
