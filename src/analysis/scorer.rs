/*!
 * Lexicon-based emotion scoring of a single sentence.
 */

use log::debug;

use super::annotation::Lemmatizer;
use super::lexicon::{EmotionLexicon, EmotionVector};
use crate::errors::AnalysisError;

/// Sums lexicon scores over a sentence's lemmas.
#[derive(Debug, Clone, Copy)]
pub struct EmotionScorer<'a> {
    lexicon: &'a EmotionLexicon,
}

impl<'a> EmotionScorer<'a> {
    /// Create a scorer over a lexicon
    pub fn new(lexicon: &'a EmotionLexicon) -> Self {
        Self { lexicon }
    }

    /// Raw emotion vector of a lemma sequence; unknown lemmas add nothing
    pub fn score<S: AsRef<str>>(&self, lemmas: &[S]) -> EmotionVector {
        self.score_counted(lemmas).0
    }

    // Scores plus the number of lemmas found in the lexicon
    fn score_counted<S: AsRef<str>>(&self, lemmas: &[S]) -> (EmotionVector, usize) {
        let mut scores = self.lexicon.zero_vector();
        let mut matched = 0;
        for lemma in lemmas {
            if let Some(entry) = self.lexicon.scores_for(lemma.as_ref()) {
                scores.add_scores(entry);
                matched += 1;
            }
        }
        (scores, matched)
    }

    /// Lemmatize a sentence with the emotion pass and score it
    pub fn score_sentence(
        &self,
        sentence: &str,
        lemmatizer: &dyn Lemmatizer,
    ) -> Result<EmotionVector, AnalysisError> {
        let lemmas = lemmatizer.lemmatize(sentence)?;
        let (scores, matched) = self.score_counted(&lemmas);
        debug!(
            "Sentence scored: {} lemmas, {} in lexicon",
            lemmas.len(),
            matched
        );
        Ok(scores)
    }
}
