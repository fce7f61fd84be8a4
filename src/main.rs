//! # pathrank CLI
//!
//! Rank a codebase's file list against a typed query from the command line.
//!
//! ```bash
//! # Rank the files tracked by a git checkout
//! pathrank --git ~/src/chromium sptr
//!
//! # Use the legacy build database, JSON output
//! pathrank --sqlite builddb.sqlite --format json tabstr
//!
//! # Everything from a YAML config, at most 5 results
//! pathrank --config pathrank.yaml --limit 5 tab
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pathrank::{rank, load_candidates, HighlightRange, PathMatch, PathRankConfig, SourceConfig};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathrank")]
#[command(about = "Fuzzy-rank file paths against a typed query")]
#[command(version)]
struct Cli {
    /// YAML config file naming the source and ranking settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Newline-delimited list of paths
    #[arg(long, conflicts_with_all = ["sqlite", "git"])]
    list: Option<PathBuf>,

    /// SQLite build database (`SELECT name FROM filenames`)
    #[arg(long, conflicts_with = "git")]
    sqlite: Option<PathBuf>,

    /// Git checkout whose tracked files are ranked
    #[arg(long)]
    git: Option<PathBuf>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Score candidates on all cores
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Query to rank against (may be empty)
    query: String,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Legacy,
}

impl Cli {
    /// Command-line source flags win over the config file.
    fn source(&self, file_config: Option<&PathRankConfig>) -> Result<SourceConfig> {
        if let Some(list) = &self.list {
            return Ok(SourceConfig::file_list(list));
        }
        if let Some(db) = &self.sqlite {
            return Ok(SourceConfig::sqlite(db));
        }
        if let Some(repo) = &self.git {
            return Ok(SourceConfig::git(repo));
        }
        file_config
            .map(|cfg| cfg.source.clone())
            .context("no candidate source: pass --list, --sqlite, --git or --config")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file_config = cli
        .config
        .as_ref()
        .map(|path| {
            PathRankConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))
        })
        .transpose()?;

    let source = cli.source(file_config.as_ref())?;
    let mut rank_config = file_config
        .as_ref()
        .map(PathRankConfig::rank_config)
        .unwrap_or_default();
    if let Some(limit) = cli.limit {
        rank_config.max_results = limit;
    }
    if cli.parallel {
        rank_config.use_parallel = true;
    }

    let candidates =
        load_candidates(&source).with_context(|| format!("loading candidates from {source}"))?;
    tracing::info!(%source, count = candidates.len(), "candidates loaded");

    let hits = rank(&candidates[..], &cli.query, &rank_config)?;

    match cli.format {
        OutputFormat::Text => {
            for hit in &hits {
                println!("{:>8.3}  {}  {}", hit.score, hit.path, format_ranges(&hit.ranges));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
        OutputFormat::Legacy => println!("{}", legacy_json(&hits)),
    }

    Ok(())
}

fn format_ranges(ranges: &[HighlightRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("[{},{}]", r.start, r.end))
        .collect::<Vec<_>>()
        .join(" ")
}

fn legacy_json(hits: &[PathMatch]) -> serde_json::Value {
    let mut rows = vec![json!("filenames")];
    rows.extend(
        hits.iter()
            .map(|hit| json!({"path": hit.path, "path_highlight_ranges": hit.ranges})),
    );
    json!([rows])
}
