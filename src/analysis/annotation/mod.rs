/*!
 * Linguistic annotation.
 *
 * Two independent passes feed the analysis:
 * - `Annotator`: tokens with lemma and part-of-speech tag, used for the
 *   stylometric statistics over the whole document
 * - `Lemmatizer`: lemmas only, used per sentence for emotion scoring
 *
 * Both are services behind traits so another engine can be plugged in.
 * The built-in implementations are rule-based and target Romanian:
 * - `dictionary`: closed-class words and known inflected forms
 * - `tagger`: the `RuleTagger` annotator
 * - `lemmatizer`: the `SuffixLemmatizer`
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::AnnotationError;

pub mod dictionary;
pub mod lemmatizer;
pub mod tagger;

pub use dictionary::LemmaDictionary;
pub use lemmatizer::SuffixLemmatizer;
pub use tagger::RuleTagger;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Adj,
    Verb,
    Aux,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Intj,
    Num,
    Punct,
    Sym,
    X,
}

impl PosTag {
    /// Canonical upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Adj => "ADJ",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adv => "ADV",
            PosTag::Adp => "ADP",
            PosTag::Det => "DET",
            PosTag::Pron => "PRON",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Intj => "INTJ",
            PosTag::Num => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Sym => "SYM",
            PosTag::X => "X",
        }
    }

    /// Grammatical glue excluded from the most-common-words ranking.
    pub fn is_function_word(&self) -> bool {
        matches!(
            self,
            PosTag::Det
                | PosTag::Adp
                | PosTag::Cconj
                | PosTag::Sconj
                | PosTag::Part
                | PosTag::Intj
                | PosTag::Punct
                | PosTag::Aux
                | PosTag::Pron
                | PosTag::Adv
        )
    }

    /// Words counted as filler in the filler/content split.
    pub fn is_filler(&self) -> bool {
        matches!(self, PosTag::Adp | PosTag::Aux | PosTag::Sconj | PosTag::Cconj)
    }

    /// Open classes that take part in the abstract/concrete split.
    pub fn is_lexical(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Adj | PosTag::Verb)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NOUN" => Ok(PosTag::Noun),
            "PROPN" => Ok(PosTag::Propn),
            "ADJ" => Ok(PosTag::Adj),
            "VERB" => Ok(PosTag::Verb),
            "AUX" => Ok(PosTag::Aux),
            "ADV" => Ok(PosTag::Adv),
            "ADP" => Ok(PosTag::Adp),
            "DET" => Ok(PosTag::Det),
            "PRON" => Ok(PosTag::Pron),
            "CCONJ" => Ok(PosTag::Cconj),
            "SCONJ" => Ok(PosTag::Sconj),
            "PART" => Ok(PosTag::Part),
            "INTJ" => Ok(PosTag::Intj),
            "NUM" => Ok(PosTag::Num),
            "PUNCT" => Ok(PosTag::Punct),
            "SYM" => Ok(PosTag::Sym),
            "X" => Ok(PosTag::X),
            other => Err(format!("unknown part-of-speech tag '{}'", other)),
        }
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// True when every character is alphabetic
    pub is_alpha: bool,
}

impl Token {
    /// Create a token, deriving the alphabetic flag from the surface form
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        let text = text.into();
        let is_alpha = is_alphabetic(&text);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            is_alpha,
        }
    }
}

/// Structural annotation pass: tokens with lemma and POS tag.
pub trait Annotator: Send + Sync {
    /// Annotate a text span in reading order
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError>;

    /// Engine name used in logs and errors
    fn name(&self) -> &str;
}

/// Emotion annotation pass: lemmas only.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize a text span in reading order
    fn lemmatize(&self, text: &str) -> Result<Vec<String>, AnnotationError>;

    /// Engine name used in logs and errors
    fn name(&self) -> &str;
}

/// Word-boundary tokenizer shared by the built-in passes.
///
/// Uses Unicode word boundaries, drops whitespace and keeps every
/// punctuation mark as its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Split `text` into surface tokens
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::trim)
            .collect()
    }
}

/// True for a non-empty string made only of alphabetic characters.
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Lowercase a form and fold cedilla diacritics to their comma-below forms.
pub fn normalize_form(form: &str) -> String {
    form.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ş' => 'ș',
            'ţ' => 'ț',
            other => other,
        })
        .collect()
}
