/*!
 * Rule-based part-of-speech tagger.
 *
 * Tagging order for each token:
 * 1. Punctuation, symbols and numbers by character class
 * 2. Dictionary lookup (closed classes and known inflections)
 * 3. Capitalized unknown words become proper nouns
 * 4. Verbal and adjectival suffixes
 * 5. Everything else is a noun, lemmatized by stripping the article
 */

use super::dictionary::{strip_article, LemmaDictionary};
use super::{normalize_form, Annotator, PosTag, Token, Tokenizer};
use crate::errors::AnnotationError;

const VERB_SUFFIXES: &[&str] = &["ează", "ește", "ăște", "esc", "ăsc", "ind", "ând"];

const ADJ_SUFFIXES: &[&str] = &[
    "oasă", "oase", "oși", "os", "bilă", "bile", "bili", "bil", "ică", "ice", "ic",
];

/// Structural annotator backed by a `LemmaDictionary`.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    dictionary: LemmaDictionary,
    tokenizer: Tokenizer,
}

impl RuleTagger {
    /// Create a tagger over the given dictionary
    pub fn new(dictionary: LemmaDictionary) -> Self {
        Self {
            dictionary,
            tokenizer: Tokenizer,
        }
    }

    /// Tagger over the built-in Romanian dictionary
    pub fn with_builtin_dictionary() -> Self {
        Self::new(LemmaDictionary::builtin())
    }

    /// Tag a single surface form
    pub fn tag(&self, form: &str) -> Token {
        if let Some(pos) = char_class_tag(form) {
            return Token::new(form, form, pos);
        }

        if let Some(entry) = self.dictionary.lookup(form) {
            return Token::new(form, entry.lemma.clone(), entry.pos);
        }

        let lower = normalize_form(form);
        if form.chars().next().is_some_and(char::is_uppercase) {
            return Token::new(form, form, PosTag::Propn);
        }
        if has_suffix(&lower, VERB_SUFFIXES) {
            return Token::new(form, lower, PosTag::Verb);
        }
        if has_suffix(&lower, ADJ_SUFFIXES) {
            return Token::new(form, lower, PosTag::Adj);
        }

        Token::new(form, strip_article(&lower), PosTag::Noun)
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::with_builtin_dictionary()
    }
}

impl Annotator for RuleTagger {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError> {
        Ok(self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|form| self.tag(form))
            .collect())
    }

    fn name(&self) -> &str {
        "rule-tagger"
    }
}

/// Tag forms whose class is decided by their characters alone.
fn char_class_tag(form: &str) -> Option<PosTag> {
    if form.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') && form.chars().any(|c| c.is_ascii_digit()) {
        return Some(PosTag::Num);
    }
    if form.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punctuation(c)) {
        return if form.chars().all(is_symbol) {
            Some(PosTag::Sym)
        } else {
            Some(PosTag::Punct)
        };
    }
    if !form.chars().any(char::is_alphanumeric) {
        return Some(PosTag::Sym);
    }
    None
}

fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '%' | '&' | '+' | '<' | '=' | '>' | '@' | '^' | '|' | '~' | '#' | '€' | '§')
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(c, '„' | '”' | '“' | '«' | '»' | '–' | '—' | '…' | '’' | '‘')
}

fn has_suffix(form: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| {
        form.strip_suffix(suffix)
            .is_some_and(|stem| stem.chars().count() >= 2)
    })
}
