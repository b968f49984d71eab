//! Index-time settings shared by the builder and the query parser.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{CATEGORIES_WEIGHT, EXCERPT_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT},
    inverted_index::Field,
};

/// Per-field multiplier applied to every token occurrence.
///
/// A weight of zero leaves the field out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub title: u32,
    pub excerpt: u32,
    pub categories: u32,
    pub tags: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: TITLE_WEIGHT,
            excerpt: EXCERPT_WEIGHT,
            categories: CATEGORIES_WEIGHT,
            tags: TAGS_WEIGHT,
        }
    }
}

impl FieldWeights {
    pub const fn weight(&self, field: Field) -> u32 {
        match field {
            Field::Title => self.title,
            Field::Excerpt => self.excerpt,
            Field::Categories => self.categories,
            Field::Tags => self.tags,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub weights: FieldWeights,
    /// Reduce words to their English stem before indexing and lookup.
    pub stem: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            stem: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_outweighs_other_fields_by_default() {
        let weights = FieldWeights::default();

        assert_eq!(weights.weight(Field::Title), 10);
        for field in [Field::Excerpt, Field::Categories, Field::Tags] {
            assert_eq!(weights.weight(field), 1);
        }
        assert!(IndexConfig::default().stem);
    }
}
