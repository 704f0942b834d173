use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use skimmer_core::{
    DirCaptionSource, SkimmerError, SummaryConfig, TranscriptResult, default_languages,
    fetch_transcript, format_report_readable, get_captions_dir, get_root_cache_dir,
};

#[derive(Parser)]
#[command(name = "skimmer")]
#[command(about = "Turn stored YouTube captions into timestamped, plain and summarized transcripts")]
struct Cli {
    /// Video URL
    url: String,

    /// Directory with stored captions, laid out as <dir>/<video_id>/<lang>.json
    #[arg(long)]
    captions_dir: Option<PathBuf>,

    /// Caption language to try, in order of preference (repeatable). Defaults to hi, en, en-IN.
    #[arg(short, long = "lang")]
    langs: Vec<String>,

    /// Summary config file (JSON). Defaults to the user config file when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON envelope instead of the readable report
    #[arg(long)]
    json: bool,

    /// Print only the summary
    #[arg(short, long, conflicts_with = "json")]
    summary_only: bool,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Envelope {
    Success {
        video_id: String,
        data: String,
        result: TranscriptResult,
    },
    Error {
        message: String,
    },
}

/// Message shown to the user for a failed run
fn user_message(err: &SkimmerError) -> String {
    match err {
        SkimmerError::InvalidUrl { .. } => "Invalid URL".to_string(),
        SkimmerError::CaptionsDisabled { .. } => "Captions are disabled for this video".to_string(),
        SkimmerError::NoCaptionsFound { languages, .. } => format!(
            "No captions found for this video (tried: {})",
            languages.join(", ")
        ),
        other => other.to_string(),
    }
}

async fn run(cli: &Cli) -> skimmer_core::Result<TranscriptResult> {
    let config = SummaryConfig::resolve(cli.config.as_deref()).await?;
    let captions_dir = cli
        .captions_dir
        .clone()
        .unwrap_or_else(|| get_captions_dir(&get_root_cache_dir()));
    let languages = if cli.langs.is_empty() {
        default_languages()
    } else {
        cli.langs.clone()
    };

    log::info!("Reading captions from {}", captions_dir.display());
    let source = DirCaptionSource::new(captions_dir);
    fetch_transcript(&source, &cli.url, &languages, &config).await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let outcome = run(&cli).await;

    if cli.json {
        let envelope = match &outcome {
            Ok(result) => Envelope::Success {
                video_id: result.video_id.clone(),
                data: format_report_readable(result),
                result: result.clone(),
            },
            Err(e) => Envelope::Error {
                message: user_message(e),
            },
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        if outcome.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), user_message(&e));
            std::process::exit(1);
        }
    };

    if cli.summary_only {
        println!("{}", result.summary);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("skimmer").cyan().bold(),
        style("Transcript Summarizer").dim()
    );
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", format_report_readable(&result));

    Ok(())
}
