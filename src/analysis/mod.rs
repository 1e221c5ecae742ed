/*!
 * Stylometric and emotion analysis of prose documents.
 *
 * The analysis is split into several submodules:
 *
 * - `segmenter`: Sentence segmentation and sentence-type classification
 * - `annotation`: Token, lemma and part-of-speech annotation services
 * - `lexicon`: Word-level emotion lexicon and emotion vectors
 * - `style`: Lexical and syntactic statistics
 * - `scorer`: Per-sentence emotion scoring
 * - `smoothing`: Trailing moving average over the emotion series
 * - `aggregate`: Document-level emotion totals
 * - `pipeline`: Orchestration of all stages into one result
 */

// Re-export main types for easier usage
pub use self::lexicon::{EmotionLexicon, EmotionVector};
pub use self::pipeline::{
    AnalysisResult, DocumentAnalyzer, EmotionAnalysis, EmotionSummary, TimelineEntry,
};
pub use self::style::{StyleStats, StylometricAnalyzer};

// Re-export annotation services
pub use self::annotation::{
    Annotator, LemmaDictionary, Lemmatizer, PosTag, RuleTagger, SuffixLemmatizer, Token,
};

// Submodules
pub mod aggregate;
pub mod annotation;
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod segmenter;
pub mod smoothing;
pub mod style;
