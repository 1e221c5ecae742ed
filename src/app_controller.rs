use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::analysis::{AnalysisResult, DocumentAnalyzer};
use crate::app_config::Config;
use crate::file_utils::FileManager;

// @module: Application controller for document analysis

/// Failure report written in place of an analysis result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Outcome counts of a folder run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for document analysis
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Shared analysis services, built once
    analyzer: Arc<DocumentAnalyzer>,
}

impl Controller {
    // @method: Create a controller, loading the lexicon and annotators
    pub fn with_config(config: Config) -> Result<Self> {
        let analyzer = DocumentAnalyzer::from_config(&config)
            .context("Failed to initialize analysis services")?;
        Ok(Self::with_analyzer(config, analyzer))
    }

    // @method: Create a controller around an existing analyzer
    pub fn with_analyzer(config: Config, analyzer: DocumentAnalyzer) -> Self {
        Self {
            config,
            analyzer: Arc::new(analyzer),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze an in-memory document
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        Ok(self.analyzer.analyze(text)?)
    }

    /// Read and analyze one document on a blocking worker
    pub async fn analyze_file(&self, input_file: &Path) -> Result<AnalysisResult> {
        let text = FileManager::read_to_string(input_file)?;
        let analyzer = Arc::clone(&self.analyzer);

        let result = tokio::task::spawn_blocking(move || analyzer.analyze(&text))
            .await
            .context("Analysis worker stopped unexpectedly")?
            .with_context(|| format!("Failed to analyze {:?}", input_file))?;

        Ok(result)
    }

    /// Analyze one document and write its JSON to `output`, or stdout when absent
    pub async fn run(
        &self,
        input_file: PathBuf,
        output: Option<PathBuf>,
        pretty: bool,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = Instant::now();

        if !input_file.is_file() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        if let Some(output_path) = &output {
            if output_path.exists() && !force_overwrite {
                warn!(
                    "Skipping file, analysis already exists at {:?} (use -f to force overwrite)",
                    output_path
                );
                return Ok(());
            }
        }

        let result = self.analyze_file(&input_file).await?;
        let json = result
            .to_json(pretty)
            .context("Failed to serialize analysis result")?;

        match output {
            Some(output_path) => {
                FileManager::write_to_file(&output_path, &json)?;
                info!("Success: {}", output_path.display());
            }
            None => println!("{}", json),
        }

        info!(
            "Analysis completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Analyze every `.txt` document under a directory.
    ///
    /// Each document gets a `<stem>.analysis.json` next to it; documents that
    /// already have one are skipped unless `force_overwrite` is set.
    pub async fn run_folder(
        &self,
        input_dir: PathBuf,
        pretty: bool,
        force_overwrite: bool,
    ) -> Result<FolderSummary> {
        let start_time = Instant::now();

        if !input_dir.is_dir() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let documents = FileManager::find_files(&input_dir, "txt")?;
        if documents.is_empty() {
            return Err(anyhow!("No text files found in directory: {:?}", input_dir));
        }

        let mut summary = FolderSummary::default();
        let mut pending = Vec::with_capacity(documents.len());
        for document in documents {
            let output_path = FileManager::analysis_output_path(&document);
            if output_path.exists() && !force_overwrite {
                warn!(
                    "Skipping {:?}, analysis already exists (use -f to force overwrite)",
                    document
                );
                summary.skipped += 1;
            } else {
                pending.push((document, output_path));
            }
        }

        let progress_bar = ProgressBar::new(pending.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("=> "));
        progress_bar.set_message("Analyzing documents");

        let concurrency = self.config.analysis.concurrent_documents.max(1);
        let mut outcomes = stream::iter(pending)
            .map(|(document, output_path)| async move {
                let outcome = self.write_analysis(&document, &output_path, pretty).await;
                (document, outcome)
            })
            .buffer_unordered(concurrency);

        while let Some((document, outcome)) = outcomes.next().await {
            match outcome {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {:#}", document, e);
                    summary.failed += 1;
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Folder analysis complete");

        info!(
            "Folder analysis completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.processed,
            summary.skipped,
            summary.failed
        );

        if summary.failed > 0 {
            return Err(anyhow!(
                "{} of {} documents failed to analyze",
                summary.failed,
                summary.failed + summary.processed
            ));
        }

        Ok(summary)
    }

    /// JSON error payload for a failure message
    pub fn error_payload(message: &str) -> String {
        let payload = ErrorPayload {
            error: message.to_string(),
        };
        serde_json::to_string(&payload)
            .unwrap_or_else(|_| format!("{{\"error\": {:?}}}", message))
    }

    async fn write_analysis(&self, document: &Path, output_path: &Path, pretty: bool) -> Result<()> {
        let result = self.analyze_file(document).await?;
        let json = result
            .to_json(pretty)
            .context("Failed to serialize analysis result")?;
        FileManager::write_to_file(output_path, &json)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
