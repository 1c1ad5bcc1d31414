//! querier - answers boolean `and`/`or` queries against an inverted index,
//! printing ranked results.
//!
//! Usage: querier <pageDirectory> <indexFilename>

use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tse::index::Index;
use tse::pagedir;
use tse::query;

#[derive(Parser)]
#[command(
    name = "querier",
    about = "Answer boolean queries against a crawler-produced page directory and an indexer-produced index"
)]
struct Args {
    /// pathname of directory produced by the crawler
    page_directory: PathBuf,

    /// pathname of a file produced by the indexer
    index_filename: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = pagedir::validate_or_err(&args.page_directory) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if File::open(&args.index_filename).is_err() {
        eprintln!("failed opening readable index file {}", args.index_filename.display());
        return ExitCode::FAILURE;
    }

    let Some(index) = Index::load(&args.index_filename) else {
        eprintln!("failed opening readable index file {}", args.index_filename.display());
        return ExitCode::FAILURE;
    };

    let stdin = io::stdin();
    let is_tty = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if is_tty {
            print!("Query? ");
            let _ = io::stdout().flush();
        }

        let Some(line) = lines.next() else {
            break;
        };
        let Ok(line) = line else {
            break;
        };

        respond_to_query(&line, &index, &args.page_directory);
    }

    ExitCode::SUCCESS
}

fn respond_to_query(line: &str, index: &Index, page_directory: &std::path::Path) {
    let tokens = match query::tokenize(line) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    if tokens.is_empty() {
        return;
    }

    if let Err(e) = query::validate(&tokens) {
        eprintln!("Error: {e}");
        return;
    }

    println!("Query: {}", tokens.join(" "));

    let scores = query::eval::evaluate(&tokens, index);
    let ranked = query::rank(&scores);

    if ranked.is_empty() {
        println!("No documents match.");
        println!("----------------------------------");
        return;
    }

    println!("Matches {} documents (ranked):", ranked.len());
    for (doc_id, score) in ranked {
        let url = pagedir::read_url(page_directory, doc_id).unwrap_or_default();
        println!("score\t{score} doc\t{doc_id}: {url}");
    }
    println!("----------------------------------");
}
