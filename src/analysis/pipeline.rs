/*!
 * Document analysis pipeline.
 *
 * Runs every stage over one document:
 * 1. Sentence segmentation
 * 2. Structural annotation of the whole text → stylometric statistics
 * 3. Lemma annotation per sentence → raw emotion vectors
 * 4. Temporal smoothing of the raw series
 * 5. Aggregation of the raw series into document totals
 *
 * The annotators and the lexicon are shared, read-only services; one
 * `DocumentAnalyzer` can serve many documents, from many threads.
 */

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use super::aggregate::aggregate;
use super::annotation::{Annotator, LemmaDictionary, Lemmatizer, RuleTagger, SuffixLemmatizer};
use super::lexicon::{EmotionLexicon, EmotionVector};
use super::scorer::EmotionScorer;
use super::segmenter::split_into_sentences;
use super::smoothing::TemporalSmoother;
use super::style::{StyleStats, StylometricAnalyzer};
use crate::app_config::{AnalysisConfig, Config};
use crate::errors::{AnalysisError, AppError};

/// One sentence of the emotion timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub sentence: String,
    pub scores: EmotionVector,
    pub smoothed_scores: EmotionVector,
}

/// Headline figures of the total distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionSummary {
    /// Highest-scoring non-valence emotion
    pub dominant_emotion: Option<String>,
    /// Lowest-scoring non-valence emotion
    pub least_emotion: Option<String>,
    /// Positive minus negative valence, when both columns exist
    pub net_valence: Option<f64>,
}

impl EmotionSummary {
    /// Summarize totals; `valence_columns` is `[positive, negative]`
    pub fn from_totals(totals: &EmotionVector, valence_columns: &[String]) -> Self {
        let discrete: Vec<(&str, f64)> = totals
            .iter()
            .filter(|(name, _)| !valence_columns.iter().any(|v| v == name))
            .collect();

        let mut dominant: Option<(&str, f64)> = None;
        let mut least: Option<(&str, f64)> = None;
        for &(name, score) in &discrete {
            if dominant.is_none_or(|(_, best)| score > best) {
                dominant = Some((name, score));
            }
            if least.is_none_or(|(_, lowest)| score < lowest) {
                least = Some((name, score));
            }
        }

        let net_valence = match valence_columns {
            [positive, negative, ..] => totals
                .get(positive)
                .zip(totals.get(negative))
                .map(|(p, n)| p - n),
            _ => None,
        };

        Self {
            dominant_emotion: dominant.map(|(name, _)| name.to_string()),
            least_emotion: least.map(|(name, _)| name.to_string()),
            net_valence,
        }
    }
}

/// Emotion part of the analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionAnalysis {
    pub emotion_over_sentences: Vec<TimelineEntry>,
    pub total_emotion_distribution: EmotionVector,
    pub emotion_summary: EmotionSummary,
}

/// Complete analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub style: StyleStats,
    pub emotion_analysis: EmotionAnalysis,
}

impl AnalysisResult {
    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Runs the full pipeline with injected services.
pub struct DocumentAnalyzer {
    annotator: Arc<dyn Annotator>,
    lemmatizer: Arc<dyn Lemmatizer>,
    lexicon: Arc<EmotionLexicon>,
    style: StylometricAnalyzer,
    smoother: TemporalSmoother,
    valence_columns: Vec<String>,
}

impl DocumentAnalyzer {
    /// Create an analyzer from already-constructed services
    pub fn new(
        annotator: Arc<dyn Annotator>,
        lemmatizer: Arc<dyn Lemmatizer>,
        lexicon: Arc<EmotionLexicon>,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            annotator,
            lemmatizer,
            lexicon,
            style: StylometricAnalyzer::from_config(config),
            smoother: TemporalSmoother::new(config.smoothing_window),
            valence_columns: config.valence_columns.clone(),
        }
    }

    /// Build the default services from configuration.
    ///
    /// Validates the configuration, then loads the lexicon and the optional
    /// lemma dictionary; any failure aborts before a document is analyzed.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;

        let lexicon = EmotionLexicon::load(&config.lexicon)?;

        let mut dictionary = LemmaDictionary::builtin();
        if let Some(path) = &config.annotation.lemma_dictionary {
            dictionary.extend_from_file(path)?;
        }

        Ok(Self::new(
            Arc::new(RuleTagger::new(dictionary.clone())),
            Arc::new(SuffixLemmatizer::new(dictionary)),
            Arc::new(lexicon),
            &config.analysis,
        ))
    }

    /// Shared lexicon
    pub fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    /// Analyze one document
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let started = Instant::now();
        let sentences = split_into_sentences(text);

        let tokens = self.annotator.annotate(text)?;
        debug!(
            "{} produced {} tokens for {} sentences",
            self.annotator.name(),
            tokens.len(),
            sentences.len()
        );

        let style = self.style.analyze(text, &sentences, &tokens);
        let emotion_analysis = self.analyze_emotions(&sentences)?;

        info!(
            "Analyzed document: {} sentences, {} words in {:.2?}",
            style.sentence_count,
            style.word_count,
            started.elapsed()
        );

        Ok(AnalysisResult {
            style,
            emotion_analysis,
        })
    }

    /// Score, smooth and aggregate an ordered list of sentences
    pub fn analyze_emotions(&self, sentences: &[String]) -> Result<EmotionAnalysis, AnalysisError> {
        let scorer = EmotionScorer::new(&self.lexicon);

        let raw = sentences
            .iter()
            .map(|sentence| scorer.score_sentence(sentence, self.lemmatizer.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let smoothed = self.smoother.smooth(&raw);
        let totals = aggregate(self.lexicon.zero_vector(), &raw);
        let emotion_summary = EmotionSummary::from_totals(&totals, &self.valence_columns);

        let emotion_over_sentences = sentences
            .iter()
            .zip(raw)
            .zip(smoothed)
            .map(|((sentence, scores), smoothed_scores)| TimelineEntry {
                sentence: sentence.clone(),
                scores,
                smoothed_scores,
            })
            .collect();

        Ok(EmotionAnalysis {
            emotion_over_sentences,
            total_emotion_distribution: totals,
            emotion_summary,
        })
    }
}
