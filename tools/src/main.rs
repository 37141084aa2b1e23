//! Look up words by prefix from the command line.
//!
//! Usage:
//!   cargo run -p prefix-finder-tools -- --source dinos.txt --source words_alpha.txt saur
//!   cargo run -p prefix-finder-tools -- --config finder.toml --sort longest --suffixes saurus,odon
//!   cargo run -p prefix-finder-tools -- --config finder.toml --stats
//!
//! Without a prefix argument, prefixes are read from stdin one per line and a
//! JSON page is printed for each.

mod search;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use prefix_finder_core::{build_index, Config, ResultShaper, SourceStatus};

use crate::search::SearchRequest;

#[derive(Parser, Debug)]
#[command(name = "find_words")]
#[command(about = "Find all words beginning with a prefix")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word-list file (repeatable); overrides the configured sources
    #[arg(short, long = "source")]
    sources: Vec<PathBuf>,

    /// Ordering within each group: none, longest, shortest, random
    #[arg(long)]
    sort: Option<String>,

    /// Comma-separated suffixes to list first, in priority order
    #[arg(long)]
    suffixes: Option<String>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Words per page (defaults to the configured page size)
    #[arg(long)]
    per_page: Option<usize>,

    /// Search by the last letter of the given word instead of by prefix
    #[arg(long)]
    last_letter: bool,

    /// Print index statistics and exit
    #[arg(long)]
    stats: bool,

    /// Prefix to look up; reads prefixes from stdin when omitted
    prefix: Option<String>,
}

impl Args {
    fn request(&self, prefix: &str) -> SearchRequest {
        SearchRequest {
            prefix: prefix.to_string(),
            sort: self.sort.clone(),
            suffixes: self.suffixes.clone(),
            page: Some(self.page),
            per_page: self.per_page,
            last_letter: self.last_letter,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
    }

    eprintln!("Loading word lists...");
    let (index, report) = build_index(&config.sources);
    for source in &report.sources {
        match &source.status {
            SourceStatus::Loaded => {}
            SourceStatus::Missing => {
                eprintln!("Warning: File '{}' not found.", source.path.display())
            }
            SourceStatus::Failed(reason) => {
                eprintln!("Error loading '{}': {}", source.path.display(), reason)
            }
        }
    }
    if report.all_failed() || index.is_empty() {
        anyhow::bail!("no words loaded from {} source(s)", config.sources.len());
    }

    let stats = index.stats();
    eprintln!("Loaded {} words", stats.total_insertions);

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let shaper = ResultShaper::new(Arc::new(index));

    if let Some(prefix) = &args.prefix {
        let page = search::run(&shaper, &config, &args.request(prefix));
        println!("{}", serde_json::to_string(&page)?);
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        let page = search::run(&shaper, &config, &args.request(input));
        println!("{}", serde_json::to_string(&page)?);
    }
    Ok(())
}
