/*!
 * Stylometric statistics.
 *
 * Two separate token streams feed these statistics:
 * - orthographic words: a `\b\w+\b` scan of the lowercased raw text, used
 *   for word counts, vocabulary size and sentence lengths
 * - annotated tokens: the structural annotator's output, used for every
 *   POS-based feature (dicendi verbs, abstract/concrete, common words, filler)
 *
 * `content_words` is `word_count - filler_words`, mixing both streams. It is
 * an approximation, not a partition, and can go negative on odd input.
 */

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::annotation::{normalize_form, PosTag, Token};
use super::segmenter::SentenceType;
use crate::app_config::AnalysisConfig;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex"));

/// Sentence counts by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentenceTypeCounts {
    pub declarative: usize,
    #[serde(rename = "interogative")]
    pub interrogative: usize,
    pub exclamative: usize,
}

impl SentenceTypeCounts {
    fn record(&mut self, kind: SentenceType) {
        match kind {
            SentenceType::Declarative => self.declarative += 1,
            SentenceType::Interrogative => self.interrogative += 1,
            SentenceType::Exclamative => self.exclamative += 1,
        }
    }

    /// Total number of classified sentences
    pub fn total(&self) -> usize {
        self.declarative + self.interrogative + self.exclamative
    }
}

/// Document-level structural statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleStats {
    pub word_count: usize,
    pub sentence_count: usize,
    #[serde(serialize_with = "serialize_rounded")]
    pub avg_sentence_length: f64,
    /// (length in words, number of sentences), most frequent first
    pub sentence_length_distribution: Vec<(usize, usize)>,
    /// (lowercased word, occurrences), most frequent first
    pub most_common_words: Vec<(String, usize)>,
    pub dicendi_count: usize,
    pub abstract_words: usize,
    pub concrete_words: usize,
    pub sentence_types: SentenceTypeCounts,
    pub unique_words: usize,
    #[serde(serialize_with = "serialize_rounded")]
    pub uniqueness_ratio: f64,
    pub filler_words: usize,
    pub content_words: i64,
}

/// Computes `StyleStats` from text, sentences and annotated tokens.
#[derive(Debug, Clone)]
pub struct StylometricAnalyzer {
    dicendi_verbs: HashSet<String>,
    abstract_terms: HashSet<String>,
    top_k: usize,
}

impl StylometricAnalyzer {
    /// Create an analyzer from explicit word lists
    pub fn new<I, J>(dicendi_verbs: I, abstract_terms: J, top_k: usize) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        Self {
            dicendi_verbs: dicendi_verbs
                .into_iter()
                .map(|w| normalize_form(w.as_ref()))
                .collect(),
            abstract_terms: abstract_terms
                .into_iter()
                .map(|w| normalize_form(w.as_ref()))
                .collect(),
            top_k,
        }
    }

    /// Create an analyzer from the analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(&config.dicendi_verbs, &config.abstract_terms, config.top_k_words)
    }

    /// Compute every statistic for one document
    pub fn analyze(&self, text: &str, sentences: &[String], tokens: &[Token]) -> StyleStats {
        let words = orthographic_words(text);
        let word_count = words.len();
        let sentence_count = sentences.len();
        let unique_words = words.iter().collect::<HashSet<_>>().len();

        let sentence_length_distribution =
            rank_by_frequency(sentences.iter().map(|s| WORD_PATTERN.find_iter(s).count()));

        let mut sentence_types = SentenceTypeCounts::default();
        for sentence in sentences {
            sentence_types.record(SentenceType::classify(sentence));
        }

        let dicendi_count = tokens
            .iter()
            .filter(|t| {
                t.pos == PosTag::Verb && self.dicendi_verbs.contains(&normalize_form(&t.lemma))
            })
            .count();

        let (abstract_words, concrete_words) = self.abstract_concrete(tokens);

        let mut most_common_words = rank_by_frequency(
            tokens
                .iter()
                .filter(|t| !t.pos.is_function_word())
                .map(|t| t.text.to_lowercase()),
        );
        most_common_words.truncate(self.top_k);

        let filler_words = tokens.iter().filter(|t| t.pos.is_filler()).count();
        let content_words = word_count as i64 - filler_words as i64;

        StyleStats {
            word_count,
            sentence_count,
            avg_sentence_length: ratio(word_count, sentence_count),
            sentence_length_distribution,
            most_common_words,
            dicendi_count,
            abstract_words,
            concrete_words,
            sentence_types,
            unique_words,
            uniqueness_ratio: ratio(unique_words, word_count),
            filler_words,
            content_words,
        }
    }

    fn abstract_concrete(&self, tokens: &[Token]) -> (usize, usize) {
        tokens
            .iter()
            .filter(|t| t.is_alpha && t.pos.is_lexical())
            .fold((0, 0), |(abstract_count, concrete_count), t| {
                if self.abstract_terms.contains(&normalize_form(&t.lemma)) {
                    (abstract_count + 1, concrete_count)
                } else {
                    (abstract_count, concrete_count + 1)
                }
            })
    }
}

impl Default for StylometricAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

/// Orthographic words of the lowercased text.
pub fn orthographic_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count items and order them by frequency, ties by first appearance.
pub fn rank_by_frequency<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (idx, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((0, idx)).0 += 1;
    }

    let mut ranked: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(item, count, _)| (item, count))
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

// Two decimals, exact halves to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}
