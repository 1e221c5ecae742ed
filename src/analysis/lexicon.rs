/*!
 * Emotion lexicon and emotion vectors.
 *
 * The lexicon is loaded once from a delimiter-separated resource with a
 * header row. The column layout is:
 * - a leading block of metadata columns, one of them the word column
 * - the emotion columns, numeric, one per emotion
 * - a trailing block of metadata columns
 *
 * Every `EmotionVector` produced from a lexicon shares its emotion names,
 * so all vectors of a run have the same key set in the same order.
 */

use std::collections::HashMap;
use std::ops::AddAssign;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::annotation::normalize_form;
use crate::app_config::LexiconConfig;
use crate::errors::LexiconError;

/// Scores over a fixed, ordered set of emotion names.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionVector {
    emotions: Arc<[String]>,
    scores: Vec<f64>,
}

impl EmotionVector {
    /// Zero vector over the given emotions
    pub fn zeros(emotions: Arc<[String]>) -> Self {
        let scores = vec![0.0; emotions.len()];
        Self { emotions, scores }
    }

    /// Vector from explicit scores; `scores` must match `emotions` in length
    pub fn from_scores(emotions: Arc<[String]>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(emotions.len(), scores.len());
        Self { emotions, scores }
    }

    /// Score of one emotion
    pub fn get(&self, emotion: &str) -> Option<f64> {
        self.emotions
            .iter()
            .position(|name| name == emotion)
            .map(|idx| self.scores[idx])
    }

    /// Emotion names in lexicon order
    pub fn emotions(&self) -> &[String] {
        &self.emotions
    }

    /// Raw scores in lexicon order
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// (emotion, score) pairs in lexicon order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.emotions
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    /// Number of emotion dimensions
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when there are no emotion dimensions
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// True when every score is zero
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|s| *s == 0.0)
    }

    /// Add raw per-dimension scores in place
    pub fn add_scores(&mut self, scores: &[f64]) {
        for (acc, value) in self.scores.iter_mut().zip(scores) {
            *acc += value;
        }
    }

    /// Copy with every score multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            emotions: Arc::clone(&self.emotions),
            scores: self.scores.iter().map(|s| s * factor).collect(),
        }
    }
}

impl AddAssign<&EmotionVector> for EmotionVector {
    fn add_assign(&mut self, other: &EmotionVector) {
        self.add_scores(&other.scores);
    }
}

impl Serialize for EmotionVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (emotion, score) in self.iter() {
            map.serialize_entry(emotion, &score)?;
        }
        map.end()
    }
}

/// Immutable word → emotion scores table.
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    emotions: Arc<[String]>,
    entries: HashMap<String, Vec<f64>>,
}

impl EmotionLexicon {
    /// Build a lexicon from already-parsed entries
    pub fn from_entries<I>(emotions: Vec<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let emotions: Arc<[String]> = emotions.into();
        let entries = entries
            .into_iter()
            .map(|(word, mut scores)| {
                scores.resize(emotions.len(), 0.0);
                (normalize_word(&word), scores)
            })
            .collect();
        Self { emotions, entries }
    }

    /// Load the lexicon described by `config`
    pub fn load(config: &LexiconConfig) -> Result<Self, LexiconError> {
        Self::from_path(&config.path, config)
    }

    /// Load a lexicon file using the column layout in `config`
    pub fn from_path<P: AsRef<Path>>(path: P, config: &LexiconConfig) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&content, config)?;
        info!(
            "Loaded emotion lexicon {} ({} words, {} emotions)",
            path.display(),
            lexicon.len(),
            lexicon.emotions.len()
        );
        Ok(lexicon)
    }

    /// Parse delimiter-separated lexicon content
    pub fn parse(content: &str, config: &LexiconConfig) -> Result<Self, LexiconError> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header_line) = lines.next().ok_or(LexiconError::Empty)?;
        let header: Vec<String> = split_row(header_line.trim_start_matches('\u{feff}'), config.delimiter)
            .into_iter()
            .map(str::to_string)
            .collect();

        let word_idx = header
            .iter()
            .position(|name| name == &config.word_column)
            .ok_or_else(|| LexiconError::MissingColumn(config.word_column.clone()))?;

        let leading = config.leading_metadata_columns;
        let trailing = config.trailing_metadata_columns;
        if word_idx >= leading {
            return Err(LexiconError::MisplacedWordColumn {
                column: config.word_column.clone(),
                index: word_idx,
                leading,
            });
        }
        if header.len() <= leading + trailing {
            return Err(LexiconError::NoEmotionColumns {
                columns: header.len(),
                leading,
                trailing,
            });
        }
        let emotion_range = leading..header.len() - trailing;
        let emotions: Vec<String> = header[emotion_range.clone()].to_vec();

        let mut entries = HashMap::new();
        for (idx, line) in lines {
            let line_no = idx + 1;
            let cells = split_row(line, config.delimiter);
            if cells.len() != header.len() {
                return Err(LexiconError::MalformedRow {
                    line: line_no,
                    found: cells.len(),
                    expected: header.len(),
                });
            }

            let word = normalize_word(cells[word_idx]);
            if word.is_empty() {
                debug!("Skipping lexicon row {} with an empty word", line_no);
                continue;
            }

            let scores = emotion_range
                .clone()
                .map(|col| parse_score(cells[col], line_no, &header[col]))
                .collect::<Result<Vec<f64>, LexiconError>>()?;

            entries.insert(word, scores);
        }

        Ok(Self {
            emotions: emotions.into(),
            entries,
        })
    }

    /// Scores for a word; the zero vector when the word is unknown
    pub fn lookup(&self, word: &str) -> EmotionVector {
        match self.scores_for(word) {
            Some(scores) => EmotionVector::from_scores(Arc::clone(&self.emotions), scores.to_vec()),
            None => self.zero_vector(),
        }
    }

    /// Raw scores for a word, if present
    pub fn scores_for(&self, word: &str) -> Option<&[f64]> {
        self.entries.get(&normalize_word(word)).map(Vec::as_slice)
    }

    /// True when the word has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize_word(word))
    }

    /// Zero vector over this lexicon's emotions
    pub fn zero_vector(&self) -> EmotionVector {
        EmotionVector::zeros(Arc::clone(&self.emotions))
    }

    /// Emotion names in column order
    pub fn emotion_names(&self) -> &[String] {
        &self.emotions
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lexicon has no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-fold and trim a word for lexicon lookup.
///
/// Cedilla spellings (`ş`, `ţ`) fold to comma-below so both Romanian
/// encodings of a word hit the same entry.
pub fn normalize_word(word: &str) -> String {
    normalize_form(word)
}

fn split_row(line: &str, delimiter: char) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(delimiter)
        .map(|cell| cell.trim().trim_matches('"').trim())
        .collect()
}

fn parse_score(cell: &str, line: usize, column: &str) -> Result<f64, LexiconError> {
    if cell.is_empty() {
        return Ok(0.0);
    }
    cell.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LexiconError::InvalidScore {
            line,
            column: column.to_string(),
            value: cell.to_string(),
        })
}
