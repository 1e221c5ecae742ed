/*!
 * # emostyle - Stylometric and emotion analysis of prose
 *
 * A Rust library that describes the style of a document and traces how its
 * emotional content changes from sentence to sentence.
 *
 * ## Features
 *
 * - Sentence segmentation and sentence-type classification
 * - Lexical statistics: word counts, vocabulary richness, most common words
 * - Syntactic statistics from part-of-speech annotation:
 *   - speech verbs, abstract and concrete nouns
 *   - function words versus content words
 * - Emotion scoring against a word-level emotion lexicon
 * - Moving-average emotion timeline and document-level totals
 * - Folder mode with concurrent document analysis
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `analysis`: The analysis pipeline:
 *   - `analysis::segmenter`: Sentence segmentation
 *   - `analysis::annotation`: Token, lemma and part-of-speech services
 *   - `analysis::lexicon`: Emotion lexicon and emotion vectors
 *   - `analysis::style`: Stylometric statistics
 *   - `analysis::pipeline`: End-to-end document analysis
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod analysis;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use analysis::{AnalysisResult, DocumentAnalyzer, EmotionLexicon, EmotionVector};
pub use app_controller::Controller;
pub use errors::{AnalysisError, AnnotationError, AppError, LexiconError};
