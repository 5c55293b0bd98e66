// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the match-string-trie command-line interface.
//!
//! Three subcommands: `build` to validate and eagerly build a trie from a grokked-CPE
//! dataset and report its shape, `query` to resolve a bag of terms to a title, and
//! `inspect` to examine a grokked-CPE file without building anything.

pub mod display;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::engine::MatchStringTrie;
use crate::loader::{self, Synonyms};
use crate::types::{EngineOptions, ScoringStrategy};

#[derive(Parser)]
#[command(
    name = "match-string-trie",
    about = "Resolves loose term sets to product titles via a CPE-derived match-string trie",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a grokked-CPE dataset and eagerly build its trie
    Build {
        /// Directory containing grokked.json and an optional synonyms.json
        #[arg(short, long)]
        input: String,

        /// Directory to write the build report to
        #[arg(short, long)]
        output: String,
    },

    /// Resolve a bag of query terms against a grokked-CPE file
    Query {
        /// Path to a grokked-CPE JSON file
        file: String,

        /// Query terms
        terms: Vec<String>,

        /// Return every tied candidate instead of refining to a single best match
        #[arg(long)]
        all: bool,

        /// Only consider exact trie-key matches, skipping subtree/prefix approximation
        #[arg(long)]
        strict: bool,

        /// Bucket-scoring strategy for approximate matches
        #[arg(long, value_enum, default_value_t = ScoringStrategyArg::DistanceFromQuery)]
        strategy: ScoringStrategyArg,
    },

    /// Pretty-print a grokked-CPE file's shape without building a trie
    Inspect {
        /// Path to a grokked-CPE JSON file
        file: String,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ScoringStrategyArg {
    Simple,
    DistanceFromQuery,
}

impl From<ScoringStrategyArg> for ScoringStrategy {
    fn from(arg: ScoringStrategyArg) -> Self {
        match arg {
            ScoringStrategyArg::Simple => ScoringStrategy::Simple,
            ScoringStrategyArg::DistanceFromQuery => ScoringStrategy::DistanceFromQuery,
        }
    }
}

pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Build { input, output } => run_build(&input, &output),
        Commands::Query {
            file,
            terms,
            all,
            strict,
            strategy,
        } => run_query(&file, &terms, !all, strict, strategy.into()),
        Commands::Inspect { file } => run_inspect(&file),
    }
}

#[cfg(feature = "parallel")]
fn build_progress_bar(title_count: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap();
    pb.set_style(style);
    pb.set_message(format!("Expanding keys for {title_count} titles..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

fn run_build(input_dir: &str, output_dir: &str) -> Result<(), String> {
    let input_path = Path::new(input_dir);
    let grokked_path = input_path.join("grokked.json");
    let mut titles = loader::load_titles(&grokked_path).map_err(|e| e.to_string())?;

    let synonyms_path = input_path.join("synonyms.json");
    if synonyms_path.is_file() {
        let synonyms = Synonyms::load(&synonyms_path).map_err(|e| e.to_string())?;
        synonyms.merge_into(&mut titles);
    }

    let title_count = titles.len();

    #[cfg(feature = "parallel")]
    let progress = build_progress_bar(title_count as u64);

    let options = EngineOptions {
        eager_load: true,
        ..EngineOptions::default()
    };
    let engine = MatchStringTrie::new(titles, options, None);

    #[cfg(feature = "parallel")]
    progress.finish_and_clear();

    let report = format!(
        "titles: {title_count}\nkeys: {}\nprefix terms: {}\n",
        engine.key_count(),
        engine.prefix_term_count()
    );

    let output_path = Path::new(output_dir);
    fs::create_dir_all(output_path)
        .map_err(|e| format!("failed to create {}: {e}", output_path.display()))?;
    fs::write(output_path.join("report.txt"), &report)
        .map_err(|e| format!("failed to write report: {e}"))?;

    print!("{report}");
    Ok(())
}

fn run_query(
    file: &str,
    terms: &[String],
    best_only: bool,
    strict: bool,
    strategy: ScoringStrategy,
) -> Result<(), String> {
    let titles = loader::load_titles(file).map_err(|e| e.to_string())?;
    let options = EngineOptions {
        scoring_strategy: strategy,
        ..EngineOptions::default()
    };
    let engine = MatchStringTrie::new(titles, options, None);

    let matches = engine.search(terms, best_only, strict);
    let mut sorted: Vec<String> = matches.iter().map(|t| t.to_string()).collect();
    sorted.sort();
    display::print_matches(&sorted);
    Ok(())
}

fn run_inspect(file: &str) -> Result<(), String> {
    let titles = loader::load_titles(file).map_err(|e| e.to_string())?;

    let mut field_count_histogram: HashMap<usize, usize> = HashMap::new();
    for (_, fields) in &titles {
        *field_count_histogram.entry(fields.fields().len()).or_insert(0) += 1;
    }
    let prefix_terms = crate::key_expand::prefix_terms_only(&titles);

    display::section_top("grokked dataset");
    display::row(&format!(" titles: {}", titles.len()));
    display::row(&format!(" prefix terms: {}", prefix_terms.len()));
    display::row(" field-count histogram:");
    let mut field_counts: Vec<(&usize, &usize)> = field_count_histogram.iter().collect();
    field_counts.sort();
    for (fields, count) in field_counts {
        display::row(&format!("   {fields} fields: {count} titles"));
    }
    display::section_bot();

    Ok(())
}
