use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::{build_index, load_noise_words, DocumentList, KeywordIndex, NoiseWords, DEFAULT_TOP_K};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over text documents and run two-keyword searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Document list file (names relative to its directory) or a directory of documents
    #[arg(long)]
    docs: PathBuf,
    /// Noise-word file; the built-in English list is used when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every keyword with its ranked occurrence list
    Dump {
        #[command(flatten)]
        index: IndexArgs,
        /// Emit the index as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Documents containing either keyword, best first
    Search {
        #[command(flatten)]
        index: IndexArgs,
        /// Maximum number of documents to report
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        kw1: String,
        kw2: String,
    },
    /// Build once, then answer `kw1 kw2` lines from stdin
    Repl {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { index, json } => {
            let index = make_index(&index)?;
            dump(&index, json)
        }
        Commands::Search { index, top_k, kw1, kw2 } => {
            let index = make_index(&index)?;
            let mut out = io::stdout().lock();
            for doc in index.top_k_search(&normalize_query(&kw1), &normalize_query(&kw2), top_k) {
                writeln!(out, "{doc}")?;
            }
            Ok(())
        }
        Commands::Repl { index, top_k } => {
            let index = make_index(&index)?;
            repl(&index, top_k)
        }
    }
}

fn make_index(args: &IndexArgs) -> Result<KeywordIndex> {
    let noise = match &args.noise {
        Some(path) => load_noise_words(path)?,
        None => NoiseWords::english(),
    };
    let list = if args.docs.is_dir() {
        list_directory(&args.docs)?
    } else {
        DocumentList::load(&args.docs)?
    };
    tracing::info!(docs = list.documents.len(), noise_words = noise.len(), "indexing");
    let index = build_index(&list.documents, &noise, &list.source())
        .with_context(|| format!("building index from {}", args.docs.display()))?;
    Ok(index)
}

/// Every regular file under `dir`, sorted so merge order is stable between runs.
fn list_directory(dir: &Path) -> Result<DocumentList> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if !entry.file_type().is_file() { continue; }
        let rel = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        match rel.to_str() {
            Some(name) => documents.push(name.to_string()),
            None => tracing::warn!(path = %entry.path().display(), "skipping file with non-UTF-8 name"),
        }
    }
    Ok(DocumentList { root: dir.to_path_buf(), documents })
}

fn normalize_query(keyword: &str) -> String { keyword.trim().to_lowercase() }

fn dump(index: &KeywordIndex, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, index)?;
        writeln!(out)?;
        return Ok(());
    }
    let mut keywords: Vec<_> = index.keywords().collect();
    keywords.sort_by(|a, b| a.0.cmp(b.0));
    for (keyword, occurrences) in keywords {
        let list: Vec<String> = occurrences.iter().map(ToString::to_string).collect();
        writeln!(out, "{keyword} [{}]", list.join(", "))?;
    }
    Ok(())
}

fn repl(index: &KeywordIndex, top_k: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "Enter two keywords (or `exit`):")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "exit" { break; }
        if line.is_empty() { continue; }
        let words: Vec<&str> = line.split_whitespace().collect();
        let [kw1, kw2] = words.as_slice() else {
            writeln!(out, "expected two keywords, got {}", words.len())?;
            continue;
        };
        let hits = index.top_k_search(&normalize_query(kw1), &normalize_query(kw2), top_k);
        if hits.is_empty() {
            writeln!(out, "no matching documents")?;
        } else {
            writeln!(out, "{}", hits.join(", "))?;
        }
        out.flush()?;
    }
    Ok(())
}
