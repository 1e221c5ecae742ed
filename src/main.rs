// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use emostyle::app_config::{self, Config};
use emostyle::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a text document or a directory of documents (default command)
    Analyze(AnalyzeArgs),

    /// Generate shell completions for emostyle
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by the default invocation and the `analyze` subcommand
#[derive(Args, Debug, Clone)]
struct AnalysisOptions {
    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Emotion lexicon file (overrides the configured path)
    #[arg(short, long, value_name = "LEXICON")]
    lexicon: Option<PathBuf>,

    /// Output file for a single document (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Smoothing window in sentences
    #[arg(short = 'w', long)]
    window: Option<usize>,

    /// Number of most common words to report
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    #[command(flatten)]
    options: AnalysisOptions,
}

/// emostyle - stylometric and emotion analysis of prose
///
/// Segments a document into sentences, computes lexical and syntactic
/// statistics and scores each sentence against an emotion lexicon.
#[derive(Parser, Debug)]
#[command(name = "emostyle")]
#[command(version)]
#[command(about = "Stylometric and emotion analysis of prose documents")]
#[command(long_about = "emostyle computes stylometric statistics and a sentence-by-sentence emotion timeline for prose documents and prints them as JSON.

EXAMPLES:
    emostyle novel.txt                          # Analyze using default config, print JSON
    emostyle --pretty -o novel.json novel.txt   # Write pretty JSON to a file
    emostyle -l data/RoEmoLex.csv novel.txt     # Use a specific emotion lexicon
    emostyle -w 3 -k 20 novel.txt               # Wider smoothing, top 20 words
    emostyle -f --log-level debug /corpus/      # Analyze a directory, overwriting outputs
    emostyle completions bash > emostyle.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT:
    A single document prints its analysis to stdout unless --output is given.
    Directory inputs write <name>.analysis.json next to every .txt file.
    Any failure prints {\"error\": \"...\"} and exits with a non-zero status.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    #[command(flatten)]
    options: AnalysisOptions,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "\x1B[1;31m"),
            Level::Warn => ("WARN ", "\x1B[1;33m"),
            Level::Info => ("INFO ", "\x1B[1;32m"),
            Level::Debug => ("DEBUG", "\x1B[1;36m"),
            Level::Trace => ("TRACE", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Trace is the ceiling; the effective level is set once the config is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    let outcome = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "emostyle", &mut std::io::stdout());
            return;
        }
        Some(Commands::Analyze(args)) => run_analyze(args).await,
        None => match cli.input_path {
            Some(input_path) => {
                run_analyze(AnalyzeArgs {
                    input_path,
                    options: cli.options,
                })
                .await
            }
            None => Err(anyhow!("INPUT_PATH is required when no subcommand is specified")),
        },
    };

    if let Err(e) = outcome {
        let message = format!("{:#}", e);
        error!("{}", message);
        println!("{}", Controller::error_payload(&message));
        std::process::exit(1);
    }
}

async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let options = args.options;

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&options)?;

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    info!(
        "Analyzing {} text with lexicon {}",
        config.language_name().unwrap_or("unknown-language"),
        config.lexicon.path.display()
    );

    let controller = Controller::with_config(config)?;

    let input_path = args.input_path;
    if input_path.is_file() {
        controller
            .run(input_path, options.output, options.pretty, options.force_overwrite)
            .await
    } else if input_path.is_dir() {
        if options.output.is_some() {
            warn!("--output is ignored for directory inputs; results are written next to each document");
        }
        controller
            .run_folder(input_path, options.pretty, options.force_overwrite)
            .await
            .map(|_| ())
    } else {
        Err(anyhow!("Input path does not exist: {:?}", input_path))
    }
}

// Load or create configuration, then apply command line overrides
fn load_config(options: &AnalysisOptions) -> Result<Config> {
    let config_path = Path::new(&options.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path.display()
        );
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(lexicon) = &options.lexicon {
        config.lexicon.path = lexicon.clone();
    }

    if let Some(window) = options.window {
        config.analysis.smoothing_window = window;
    }

    if let Some(top_k) = options.top_k {
        config.analysis.top_k_words = top_k;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}
