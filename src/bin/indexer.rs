//! indexer - builds an inverted index from a crawler-produced page corpus
//! and writes it to a file.
//!
//! Usage: indexer <pageDirectory> <indexFilename>

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tse::index;
use tse::pagedir;

#[derive(Parser)]
#[command(
    name = "indexer",
    about = "Build an inverted index from a crawler-produced page directory"
)]
struct Args {
    /// pathname of directory produced by crawler
    page_directory: PathBuf,

    /// pathname of a file into which the index should be written
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

    if let Err(e) = File::create(&args.index_filename) {
        eprintln!("failed opening writable index file {}: {e}", args.index_filename.display());
        return ExitCode::FAILURE;
    }

    let built = index::build_from_pagedir(&args.page_directory, tse::fetch::words_of);
    tracing::info!(words = built.len(), "index built");
    built.save(&args.index_filename);

    ExitCode::SUCCESS
}
