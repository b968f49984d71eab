use std::collections::BTreeSet;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    inverted_index::Field,
};

/// One blog post as it appears in the generated store.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub excerpt: String,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub url: String,
    pub teaser: Option<String>,
}

/// Store entry as decoded from JSON. Every field may be absent or null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub url: Option<String>,
    pub teaser: Option<String>,
}

impl Document {
    pub fn new(title: &str, excerpt: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            categories: BTreeSet::new(),
            tags: BTreeSet::new(),
            url: url.to_string(),
            teaser: None,
        }
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = labels(categories.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = labels(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_teaser(mut self, teaser: &str) -> Self {
        self.teaser = Some(teaser.to_string());
        self
    }

    /// Text fragments of `field` in the order they are indexed.
    pub fn field_text(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Title => vec![self.title.as_str()],
            Field::Excerpt => vec![self.excerpt.as_str()],
            Field::Categories => self.categories.iter().map(String::as_str).collect(),
            Field::Tags => self.tags.iter().map(String::as_str).collect(),
        }
    }
}

impl TryFrom<RawRecord> for Document {
    type Error = Error;

    fn try_from(record: RawRecord) -> Result<Self> {
        let url = record
            .url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingUrl)?;

        Ok(Self {
            title: strip_markup(&record.title.unwrap_or_default()),
            excerpt: strip_markup(&record.excerpt.unwrap_or_default()),
            categories: labels(record.categories.unwrap_or_default()),
            tags: labels(record.tags.unwrap_or_default()),
            url,
            teaser: record.teaser.filter(|teaser| !teaser.trim().is_empty()),
        })
    }
}

fn labels(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    values
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Text content of an HTML fragment with entities decoded and whitespace collapsed.
pub fn strip_markup(fragment: &str) -> String {
    let html = Html::parse_fragment(fragment);
    let text = html.root_element().text().collect::<Vec<_>>().join(" ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
