mod emit;
mod extract;
mod group;
mod loader;
mod record;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};

use record::WordRecord;

#[derive(Parser)]
#[command(
    name = "word_processor",
    about = "Split a JSON-Lines word dump into per-letter site data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract examples and stories, then write per-letter JSON + stub pages
    Run {
        /// JSON-Lines word dump
        #[arg(short, long, default_value = "docs/.vuepress/gptwords.json")]
        input: PathBuf,
        /// Output directory for per-letter JSON artifacts
        #[arg(long, default_value = "docs/.vuepress/public/words")]
        json_dir: PathBuf,
        /// Output directory for per-letter stub pages
        #[arg(long, default_value = "docs/words")]
        pages_dir: PathBuf,
    },
    /// Parse and extract only; report what a run would emit
    Check {
        /// JSON-Lines word dump
        #[arg(short, long, default_value = "docs/.vuepress/gptwords.json")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            json_dir,
            pages_dir,
        } => run(&input, &json_dir, &pages_dir),
        Commands::Check { input } => check(&input),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run(input: &Path, json_dir: &Path, pages_dir: &Path) -> Result<()> {
    println!("Reading {}...", input.display());
    let records = loader::load_records(input)?;
    println!("Parsed {} word entries.", records.len());
    if records.is_empty() {
        println!("Nothing to process.");
        return Ok(());
    }

    let (processed, counts) = process_records(&records);
    counts.print();

    let total = processed.len();
    let groups = group::group_records(processed);
    let bucketed: usize = groups.values().map(Vec::len).sum();

    let sidebar = emit::emit_groups(&groups, json_dir, pages_dir)?;
    println!(
        "Wrote {} buckets ({} words, {} entries without a usable headword).",
        groups.len(),
        bucketed,
        total - bucketed
    );
    emit::print_sidebar_config(&sidebar);
    Ok(())
}

fn check(input: &Path) -> Result<()> {
    println!("Reading {}...", input.display());
    let records = loader::load_records(input)?;
    println!("Parsed {} word entries.", records.len());
    if records.is_empty() {
        println!("Nothing to check.");
        return Ok(());
    }

    let (processed, counts) = process_records(&records);
    counts.print();

    let total = processed.len();
    let groups = group::group_records(processed);
    let bucketed: usize = groups.values().map(Vec::len).sum();

    println!("\n{:>6} | {:>5}", "Bucket", "Words");
    println!("{}", "-".repeat(16));
    for key in group::ordered_keys(&groups) {
        println!("{:>6} | {:>5}", key, groups[&key].len());
    }
    println!(
        "\n{} of {} entries bucketed, {} dropped.",
        bucketed,
        total,
        total - bucketed
    );
    Ok(())
}

struct ExtractCounts {
    with_examples: usize,
    example_sentences: usize,
    with_story: usize,
}

impl ExtractCounts {
    fn print(&self) {
        println!(
            "Extracted example lists from {} entries ({} sentences) and {} stories.",
            self.with_examples, self.example_sentences, self.with_story
        );
    }
}

fn process_records(records: &[WordRecord]) -> (Vec<WordRecord>, ExtractCounts) {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut counts = ExtractCounts {
        with_examples: 0,
        example_sentences: 0,
        with_story: 0,
    };
    let mut processed = Vec::with_capacity(records.len());

    for chunk in records.chunks(500) {
        let results: Vec<WordRecord> = chunk.par_iter().map(extract::process_record).collect();
        for record in &results {
            if !record.examples.is_empty() {
                counts.with_examples += 1;
                counts.example_sentences += record.examples.len();
            }
            if record.story.is_some() {
                counts.with_story += 1;
            }
        }
        processed.extend(results);
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    (processed, counts)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
