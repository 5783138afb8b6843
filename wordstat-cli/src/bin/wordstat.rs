use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordstat_cli::loader::{self, LoadedText};
use wordstat_cli::{export, render, sample, ComparisonReport, DocumentReport};
use wordstat_core::{analyze_named, AnalyzerConfig, Language, TextAnalyzer};

#[derive(Debug, Parser)]
#[command(name = "wordstat", about = "Word counts, frequencies and similarity for text files")]
struct Cli {
    #[command(flatten)]
    options: AnalysisOptions,

    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct AnalysisOptions {
    /// Path to an analyzer config file (JSON); defaults to $WORDSTAT_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in stop-word list: english, arabic or none
    #[arg(long, global = true)]
    language: Option<String>,

    /// Reading speed used for the reading-time estimate
    #[arg(long, global = true)]
    wpm: Option<u32>,

    /// Number of most common words to report (0 = all)
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Count stop words in frequencies and similarity
    #[arg(long, global = true)]
    include_stop_words: bool,

    /// File with one stop word per line, replacing the built-in list
    #[arg(long, global = true)]
    stop_words: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a file, inline text, or stdin
    Analyze {
        /// File to analyze; reads stdin when omitted
        file: Option<PathBuf>,
        /// Analyze this text instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Save the analysis as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare the vocabularies of two files
    Compare {
        first: String,
        second: String,
        /// Treat both arguments as literal text instead of paths
        #[arg(long)]
        inline: bool,
        /// Save the comparison as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Analyze several files in parallel
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Save all analyses as a JSON array
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a sample text file
    Sample {
        #[arg(long, default_value = sample::DEFAULT_SAMPLE_FILE)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_observability();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, text, output } => {
            let analyzer = build_analyzer(&cli.options)?;
            let (text, source) = match (file, text) {
                (_, Some(text)) => (text, None),
                (Some(path), None) => {
                    let LoadedText { text, source } = loader::load_text(&path)?;
                    (text, Some(source))
                }
                (None, None) => {
                    let (text, encoding) = loader::read_text(io::stdin().lock())?;
                    info!(encoding = encoding.label(), "read text from stdin");
                    (text, None)
                }
            };
            let report = analyzer.analyze(&text);
            if cli.json {
                let document = DocumentReport { source, report };
                emit_json(&document, output.as_deref())?;
            } else {
                print!("{}", render::render_report(&report, source.as_ref()));
                if let Some(path) = output {
                    export::save_json(&DocumentReport { source, report }, &path)?;
                    println!("\nAnalysis saved to {}", path.display());
                }
            }
        }
        Commands::Compare {
            first,
            second,
            inline,
            output,
        } => {
            let analyzer = build_analyzer(&cli.options)?;
            let (text_a, source_a, text_b, source_b) = if inline {
                (first, None, second, None)
            } else {
                let a = loader::load_text(&first)?;
                let b = loader::load_text(&second)?;
                (a.text, Some(a.source), b.text, Some(b.source))
            };
            let comparison = analyzer.compare_reports(&text_a, &text_b);
            if !cli.json {
                print!("{}", render::render_comparison(&comparison));
            }
            let document = ComparisonReport {
                source_a,
                source_b,
                comparison,
            };
            if cli.json {
                emit_json(&document, output.as_deref())?;
            } else if let Some(path) = output {
                export::save_json(&document, &path)?;
                println!("\nComparison saved to {}", path.display());
            }
        }
        Commands::Batch { files, output } => {
            let analyzer = build_analyzer(&cli.options)?;
            let loaded = files
                .iter()
                .map(loader::load_text)
                .collect::<Result<Vec<_>, _>>()?;
            let named: Vec<(usize, &str)> = loaded
                .iter()
                .enumerate()
                .map(|(i, doc)| (i, doc.text.as_str()))
                .collect();
            let documents: Vec<DocumentReport> = analyze_named(&analyzer, &named)
                .into_iter()
                .map(|(i, report)| DocumentReport {
                    source: Some(loaded[i].source.clone()),
                    report,
                })
                .collect();
            if cli.json {
                emit_json(&documents, output.as_deref())?;
            } else {
                for doc in &documents {
                    let name = doc
                        .source
                        .as_ref()
                        .map(|s| s.path.display().to_string())
                        .unwrap_or_default();
                    println!("{}", render::render_batch_line(&name, &doc.report.statistics));
                }
                if let Some(path) = output {
                    export::save_json(&documents, &path)?;
                    println!("\nAnalyses saved to {}", path.display());
                }
            }
        }
        Commands::Sample { output } => {
            let path = sample::write_sample(&output)?;
            println!("Sample file created: {}", path.display());
        }
    }

    Ok(())
}

/// Config file (or `WORDSTAT_CONFIG`) first, then command-line overrides.
fn build_analyzer(options: &AnalysisOptions) -> anyhow::Result<TextAnalyzer> {
    let mut config = match &options.config {
        Some(path) => AnalyzerConfig::from_path(path)?,
        None => AnalyzerConfig::from_env_or_default()?,
    };
    if let Some(language) = &options.language {
        config.language = language.parse::<Language>()?;
    }
    if let Some(wpm) = options.wpm {
        config.words_per_minute = wpm;
    }
    if let Some(top) = options.top {
        config.top_n = top;
    }
    if options.include_stop_words {
        config.filter_stop_words = false;
    }
    if let Some(path) = &options.stop_words {
        config.stop_words_file = Some(path.clone());
    }
    Ok(TextAnalyzer::new(config)?)
}

fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => export::save_json(value, path)?,
        None => println!("{}", export::to_json(value)?),
    }
    Ok(())
}

fn init_observability() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,wordstat_core=info,wordstat_cli=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so reports and JSON on stdout stay clean.
    if std::env::var_os("WORDSTAT_LOG_JSON").is_some() {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).json())
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .init();
    }
}
