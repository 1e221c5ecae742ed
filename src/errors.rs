/*!
 * Error types for the emostyle application.
 *
 * This module contains custom error types for the different stages of the
 * analysis pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading the emotion lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The resource could not be read
    #[error("Failed to read lexicon resource: {0}")]
    Io(#[from] std::io::Error),

    /// The resource has no header row
    #[error("Lexicon resource is empty")]
    Empty,

    /// The configured word column is absent from the header
    #[error("Lexicon header has no '{0}' column")]
    MissingColumn(String),

    /// The word column sits outside the leading metadata columns
    #[error("Lexicon column '{column}' is at position {index}, expected within the first {leading} metadata columns")]
    MisplacedWordColumn {
        /// Configured word column name
        column: String,
        /// 0-based position in the header
        index: usize,
        /// Leading metadata columns
        leading: usize,
    },

    /// The column layout leaves no room for emotion columns
    #[error("Lexicon header has {columns} columns, no emotion columns remain after {leading} leading and {trailing} trailing metadata columns")]
    NoEmotionColumns {
        /// Number of columns in the header
        columns: usize,
        /// Leading metadata columns
        leading: usize,
        /// Trailing metadata columns
        trailing: usize,
    },

    /// A data row does not have as many cells as the header
    #[error("Lexicon row {line} has {found} cells, expected {expected}")]
    MalformedRow {
        /// 1-based line number in the resource
        line: usize,
        /// Cells found on the line
        found: usize,
        /// Cells declared by the header
        expected: usize,
    },

    /// An emotion cell is not a number
    #[error("Lexicon row {line}, column '{column}': invalid score '{value}'")]
    InvalidScore {
        /// 1-based line number in the resource
        line: usize,
        /// Emotion column name
        column: String,
        /// Raw cell content
        value: String,
    },
}

/// Errors that can occur during linguistic annotation
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// The annotation engine failed on the given input
    #[error("Annotation engine '{engine}' failed: {message}")]
    EngineFailure {
        /// Name of the engine
        engine: String,
        /// Failure description
        message: String,
    },

    /// A lemma dictionary line could not be parsed
    #[error("Invalid lemma dictionary line {line}: {message}")]
    InvalidDictionaryLine {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        message: String,
    },

    /// The lemma dictionary file could not be read
    #[error("Failed to read lemma dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while analyzing a document
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Error from one of the annotation passes
    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// Error from the emotion lexicon
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while loading the lexicon
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Error from the analysis pipeline
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<AnnotationError> for AppError {
    fn from(error: AnnotationError) -> Self {
        Self::Analysis(AnalysisError::Annotation(error))
    }
}
