use anyhow::{Context, Result};
use clap::Parser;
use echosphere_core::{AnalysisResult, Emotion, EngineConfig, LexiconScore, PatternScores};
use echosphere_emotion::{glyph, EmotionAnalyzer, EmotionDistribution};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Classify chat messages into emotion labels.
#[derive(Parser, Debug)]
#[command(name = "echosphere", author, version, about, long_about = None)]
struct Args {
    /// Messages to analyze. Without messages or --file, stdin is read line by line.
    messages: Vec<String>,

    /// Read one message per line from this file
    #[arg(short, long, conflicts_with = "messages")]
    file: Option<PathBuf>,

    /// Engine configuration (TOML); a missing file falls back to defaults, a malformed one is an error
    #[arg(short, long, env = "ECHOSPHERE_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Append a distribution summary after the per-message results
    #[arg(long)]
    summary: bool,

    /// Emit diagnostics as JSON on stderr
    #[arg(long)]
    json_logs: bool,
}

/// One line of output.
#[derive(Serialize)]
struct MessageReport<'a> {
    text: &'a str,
    emotion: Emotion,
    emoji: &'static str,
    confidence: f64,
    polarity: f64,
    subjectivity: f64,
    vader_scores: LexiconScore,
    pattern_scores: PatternScores,
}

impl<'a> MessageReport<'a> {
    fn new(text: &'a str, result: &AnalysisResult) -> Self {
        Self {
            text,
            emotion: result.emotion,
            emoji: glyph(result.emotion),
            confidence: result.confidence,
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            vader_scores: result.vader_scores,
            pattern_scores: result.pattern_scores,
        }
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(EngineConfig::default());
    }
    EngineConfig::load(path)
}

/// Collect input messages: positional args first, otherwise the file or stdin.
/// Blank lines from a file or stdin are skipped.
fn read_messages(args: &Args) -> Result<Vec<String>> {
    if !args.messages.is_empty() {
        return Ok(args.messages.clone());
    }

    let lines: Vec<String> = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages from {:?}", path))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("Failed to read messages from stdin")?,
    };

    Ok(lines.into_iter().filter(|l| !l.trim().is_empty()).collect())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs);

    let config = load_config(args.config.as_deref())?;
    let analyzer = EmotionAnalyzer::with_config(config);
    debug!(?analyzer, "Analyzer ready");

    let messages = read_messages(&args)?;
    info!("Analyzing {} message(s)", messages.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut distribution = EmotionDistribution::new();

    for text in &messages {
        let result = analyzer.analyze(text.as_str());
        write_json(&mut out, &MessageReport::new(text, &result), args.pretty)?;
        distribution.record(&result);
    }

    if args.summary {
        write_json(&mut out, &distribution.summary(), args.pretty)?;
    }
    out.flush()?;
    Ok(())
}
