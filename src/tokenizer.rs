use std::fmt;

use crate::{constants::WORD_PATTERN, error::Result};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

pub struct Tokenizer {
    stemmer: Option<Stemmer>,
    regex: Regex,
}

impl Tokenizer {
    pub fn new(stem: bool) -> Result<Self> {
        Ok(Self {
            stemmer: stem.then(|| Stemmer::create(Algorithm::English)),
            regex: Regex::new(WORD_PATTERN)?,
        })
    }

    const fn stems(&self) -> bool {
        self.stemmer.is_some()
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.words(text)
            .map(|word| self.normalize(word))
            .collect()
    }

    /// Raw word slices of `text`, before normalization.
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(text).map(|word| word.as_str())
    }

    pub fn normalize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&word).into_owned(),
            None => word,
        }
    }
}

// `Stemmer` is neither `Clone` nor `Debug`; both are rebuilt from the stem flag.
impl Clone for Tokenizer {
    fn clone(&self) -> Self {
        Self {
            stemmer: self.stems().then(|| Stemmer::create(Algorithm::English)),
            regex: self.regex.clone(),
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("stem", &self.stems())
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl PartialEq for Tokenizer {
    fn eq(&self, other: &Self) -> bool {
        self.stems() == other.stems() && self.regex.as_str() == other.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        let tokenizer = Tokenizer::new(false).expect("Failed to create tokenizer");

        assert_eq!(
            tokenizer.tokenize("How does Ansible work? deepseek-R1, ansible.module_utils"),
            vec![
                "how",
                "does",
                "ansible",
                "work",
                "deepseek",
                "r1",
                "ansible",
                "module_utils"
            ]
        );
    }

    #[test]
    fn stemming_folds_inflections() {
        let tokenizer = Tokenizer::new(true).expect("Failed to create tokenizer");

        assert_eq!(tokenizer.normalize("Modules"), tokenizer.normalize("module"));
        assert_eq!(tokenizer.normalize("works"), tokenizer.normalize("work"));
    }

    #[test]
    fn clones_keep_stemming_setting() {
        let stemming = Tokenizer::new(true).expect("Failed to create tokenizer");
        let plain = Tokenizer::new(false).expect("Failed to create tokenizer");

        assert_eq!(stemming.clone(), stemming);
        assert_ne!(stemming, plain);
        assert_eq!(stemming.clone().normalize("modules"), stemming.normalize("module"));
        assert_eq!(plain.clone().normalize("Modules"), "modules");
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let tokenizer = Tokenizer::new(true).expect("Failed to create tokenizer");

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" ...  ").is_empty());
    }
}
