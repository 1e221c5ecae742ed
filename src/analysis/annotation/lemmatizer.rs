/*!
 * Lemma-only annotation pass used for emotion scoring.
 */

use super::dictionary::{strip_article, LemmaDictionary};
use super::{is_alphabetic, normalize_form, Lemmatizer, Tokenizer};
use crate::errors::AnnotationError;

/// Dictionary lemmatizer with an article-stripping fallback.
#[derive(Debug, Clone)]
pub struct SuffixLemmatizer {
    dictionary: LemmaDictionary,
    tokenizer: Tokenizer,
}

impl SuffixLemmatizer {
    /// Create a lemmatizer over the given dictionary
    pub fn new(dictionary: LemmaDictionary) -> Self {
        Self {
            dictionary,
            tokenizer: Tokenizer,
        }
    }

    /// Lemmatizer over the built-in Romanian dictionary
    pub fn with_builtin_dictionary() -> Self {
        Self::new(LemmaDictionary::builtin())
    }

    /// Lemma of a single surface form
    pub fn lemma(&self, form: &str) -> String {
        if let Some(entry) = self.dictionary.lookup(form) {
            return entry.lemma.clone();
        }

        let lower = normalize_form(form);
        if is_alphabetic(&lower) {
            strip_article(&lower)
        } else {
            lower
        }
    }
}

impl Default for SuffixLemmatizer {
    fn default() -> Self {
        Self::with_builtin_dictionary()
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>, AnnotationError> {
        Ok(self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|form| self.lemma(form))
            .collect())
    }

    fn name(&self) -> &str {
        "suffix-lemmatizer"
    }
}
