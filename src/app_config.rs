use anyhow::{anyhow, Context, Result};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language of the analyzed documents (ISO 639-1 or 639-3)
    #[serde(default = "default_language")]
    pub language: String,

    /// Emotion lexicon resource
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Analysis parameters
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Annotator settings
    #[serde(default)]
    pub annotation: AnnotationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Location and column layout of the emotion lexicon
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LexiconConfig {
    // @field: Path to the delimiter-separated lexicon file
    #[serde(default = "default_lexicon_path")]
    pub path: PathBuf,

    // @field: Cell delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    // @field: Header name of the word column
    #[serde(default = "default_word_column")]
    pub word_column: String,

    // @field: Metadata columns before the first emotion column
    #[serde(default = "default_leading_metadata_columns")]
    pub leading_metadata_columns: usize,

    // @field: Metadata columns after the last emotion column
    #[serde(default = "default_trailing_metadata_columns")]
    pub trailing_metadata_columns: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: default_lexicon_path(),
            delimiter: default_delimiter(),
            word_column: default_word_column(),
            leading_metadata_columns: default_leading_metadata_columns(),
            trailing_metadata_columns: default_trailing_metadata_columns(),
        }
    }
}

/// Parameters of the stylometric and emotion analysis
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Trailing moving-average window for the emotion timeline
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,

    /// Number of entries reported in most_common_words
    #[serde(default = "default_top_k_words")]
    pub top_k_words: usize,

    /// Lemmas counted as verbs of speech
    #[serde(default = "default_dicendi_verbs")]
    pub dicendi_verbs: Vec<String>,

    /// Lemmas counted as abstract vocabulary
    #[serde(default = "default_abstract_terms")]
    pub abstract_terms: Vec<String>,

    /// Lexicon columns holding overall polarity as `[positive, negative]`
    #[serde(default = "default_valence_columns")]
    pub valence_columns: Vec<String>,

    /// Documents analyzed in parallel in folder mode
    #[serde(default = "default_concurrent_documents")]
    pub concurrent_documents: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            smoothing_window: default_smoothing_window(),
            top_k_words: default_top_k_words(),
            dicendi_verbs: default_dicendi_verbs(),
            abstract_terms: default_abstract_terms(),
            valence_columns: default_valence_columns(),
            concurrent_documents: default_concurrent_documents(),
        }
    }
}

/// Annotator settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AnnotationConfig {
    /// Optional tab-separated `form lemma POS` file extending the built-in dictionary
    #[serde(default)]
    pub lemma_dictionary: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "ro".to_string()
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("data/RoEmoLex.csv")
}

fn default_delimiter() -> char {
    ';'
}

fn default_word_column() -> String {
    "word".to_string()
}

fn default_leading_metadata_columns() -> usize {
    3
}

fn default_trailing_metadata_columns() -> usize {
    1
}

fn default_smoothing_window() -> usize {
    2
}

fn default_top_k_words() -> usize {
    10
}

fn default_dicendi_verbs() -> Vec<String> {
    ["conversa", "dialoga", "vorbi", "discuta", "bârfi", "dezbate", "delibera"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_abstract_terms() -> Vec<String> {
    ["iubire", "frică", "libertate", "gândire", "idee", "emoție"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_valence_columns() -> Vec<String> {
    vec!["Pozitivitate".to_string(), "Negativitate".to_string()]
}

fn default_concurrent_documents() -> usize {
    4
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let code = self.language.trim().to_lowercase();
        let known = match code.len() {
            2 => Language::from_639_1(&code).is_some(),
            3 => Language::from_639_3(&code).is_some(),
            _ => false,
        };
        if !known {
            return Err(anyhow!("Invalid language code: '{}'", self.language));
        }

        if self.lexicon.path.as_os_str().is_empty() {
            return Err(anyhow!("Lexicon path must not be empty"));
        }

        if self.lexicon.leading_metadata_columns == 0 {
            return Err(anyhow!("Lexicon needs at least one leading metadata column for the word"));
        }

        if self.analysis.smoothing_window == 0 {
            return Err(anyhow!("Smoothing window must be at least 1"));
        }

        if self.analysis.top_k_words == 0 {
            return Err(anyhow!("top_k_words must be at least 1"));
        }

        if self.analysis.concurrent_documents == 0 {
            return Err(anyhow!("concurrent_documents must be at least 1"));
        }

        Ok(())
    }

    /// English name of the configured language
    pub fn language_name(&self) -> Option<&'static str> {
        let code = self.language.trim().to_lowercase();
        match code.len() {
            2 => Language::from_639_1(&code).map(|l| l.to_name()),
            3 => Language::from_639_3(&code).map(|l| l.to_name()),
            _ => None,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            lexicon: LexiconConfig::default(),
            analysis: AnalysisConfig::default(),
            annotation: AnnotationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
