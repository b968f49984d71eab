use crate::{
    error::Result,
    inverted_index::{DocID, InvertedIndex, Posting},
};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::{
    query::{Clause, Presence, Query},
    search_result::SearchResult,
};

pub struct SearchEngine {
    index: InvertedIndex,
}

impl SearchEngine {
    pub const fn new(index: InvertedIndex) -> Self {
        Self { index }
    }

    pub const fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = Query::parse(query, self.index.tokenizer())?;

        Ok(self.execute(&query))
    }

    /// Ranks documents matching every required clause, none of the prohibited
    /// ones, and at least one non-prohibited clause.
    pub fn execute(&self, query: &Query) -> Vec<SearchResult> {
        let mut document_ids: HashMap<DocID, f64> = HashMap::new();
        let mut required: Option<HashSet<DocID>> = None;
        let mut prohibited: HashSet<DocID> = HashSet::new();

        for clause in &query.clauses {
            let matches = self.clause_matches(clause);

            match clause.presence {
                Presence::Prohibited => {
                    prohibited.extend(matches.into_keys());
                    continue;
                }
                Presence::Required => {
                    let ids: HashSet<DocID> = matches.keys().copied().collect();
                    required = Some(match required {
                        Some(previous) => previous.intersection(&ids).copied().collect(),
                        None => ids,
                    });
                }
                Presence::Optional => {}
            }

            for (doc_id, score) in matches {
                *document_ids.entry(doc_id).or_insert(0.0) += score;
            }
        }

        let mut document_ids: Vec<_> = document_ids
            .into_iter()
            .filter(|(doc_id, _)| !prohibited.contains(doc_id))
            .collect();

        if let Some(required) = required {
            document_ids.retain(|(doc_id, _)| required.contains(doc_id));
        }

        let mut results: Vec<SearchResult> = document_ids
            .into_iter()
            .filter_map(|(doc_id, score)| {
                self.index.document(doc_id).map(|doc| {
                    SearchResult::new(doc.url.clone(), doc.title.clone(), doc.teaser.clone(), score)
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.url.cmp(&b.url)));

        results
    }

    /// Best tf-idf per document over every term the clause expands to.
    ///
    /// A field-scoped clause only filters on the field; the score stays the
    /// posting's tf-idf weighted over all fields.
    fn clause_matches(&self, clause: &Clause) -> HashMap<DocID, f64> {
        let postings: Vec<&[Posting]> = if clause.wildcard {
            // Indexed terms may be stems shorter than the typed word.
            let prefixes = BTreeSet::from([
                clause.term.clone(),
                self.index.tokenizer().normalize(&clause.term),
            ]);
            let terms: BTreeSet<&str> = prefixes
                .iter()
                .flat_map(|prefix| self.index.terms_with_prefix(prefix))
                .map(|(term, _)| term)
                .collect();

            terms
                .into_iter()
                .map(|term| self.index.postings(term))
                .collect()
        } else {
            vec![self.index.postings(&clause.term)]
        };

        let mut matches: HashMap<DocID, f64> = HashMap::new();

        for posting in postings.into_iter().flatten() {
            if clause
                .field
                .is_some_and(|field| !posting.fields.contains(&field))
            {
                continue;
            }

            let score = matches.entry(posting.doc_id).or_insert(0.0);
            *score = score.max(posting.tf_idf);
        }

        matches
    }
}
