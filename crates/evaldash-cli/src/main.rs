use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use evaldash_core::{CsvPreview, MetricCard, ModelName, ScoreTable};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evaldash")]
#[command(about = "Model evaluation dashboard - score table from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available models
    Models,

    /// Show the evaluation scores of one model
    Scores {
        /// Model ID (random_forest, logistic_regression, svm)
        #[arg(short, long)]
        model: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Preview the first rows of a CSV file
    Preview {
        /// CSV file to read
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Serialize)]
struct ScoresOutput<'a> {
    model: &'a str,
    scores: &'a [MetricCard],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let table = ScoreTable::builtin()?;

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Scores { model, output } => cmd_scores(&table, &model, output)?,
        Commands::Preview { path } => cmd_preview(&path)?,
    }

    Ok(())
}

fn cmd_models() {
    println!();
    println!("Available Models:");
    println!("{:-<45}", "");
    println!("  {:<4} {:<22} {}", "#", "ID", "Label");
    println!("{:-<45}", "");
    for (i, m) in ModelName::all().iter().enumerate() {
        println!("  {:<4} {:<22} {}", i + 1, m.slug(), m.label());
    }
    println!();
}

fn cmd_scores(table: &ScoreTable, model: &str, output: OutputFormat) -> Result<()> {
    let model: ModelName = model.parse()?;
    let cards = MetricCard::for_row(&table.get_scores(model));
    tracing::debug!("Printing {} scores for {}", cards.len(), model);

    print!("{}", format_scores(model, &cards, output)?);
    Ok(())
}

fn format_scores(model: ModelName, cards: &[MetricCard], output: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match output {
        OutputFormat::Json => {
            let payload = ScoresOutput {
                model: model.slug(),
                scores: cards,
            };
            out.push_str(&serde_json::to_string_pretty(&payload)?);
            out.push('\n');
        }
        OutputFormat::Csv => {
            out.push_str("metric,value\n");
            for card in cards {
                out.push_str(&format!("{},{:.2}\n", card.metric.label(), card.value));
            }
        }
        OutputFormat::Table => {
            out.push_str(&format!("Results: {}\n", model.label()));
            out.push_str(&format!("{:-<30}\n", ""));
            for card in cards {
                out.push_str(&format!("  {:<12} {:>8}\n", card.metric.label(), card.display));
            }
        }
    }
    Ok(out)
}

fn cmd_preview(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let preview = CsvPreview::from_reader(&file_name, file)?;

    println!("{}", preview.headers.join("\t"));
    for row in &preview.rows {
        println!("{}", row.join("\t"));
    }
    if preview.is_truncated() {
        println!("... ({} rows total)", preview.total_rows);
    }
    Ok(())
}
