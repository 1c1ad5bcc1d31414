//! indextest - loads an index file produced by the indexer and saves it to
//! another file, round-tripping the on-disk format.
//!
//! Usage: indextest <oldIndexFilename> <newIndexFilename>

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tse::index::Index;

#[derive(Parser)]
#[command(
    name = "indextest",
    about = "Round-trip an index file: load then save"
)]
struct Args {
    /// pathname of a file produced by the indexer
    old_index_filename: PathBuf,

    /// pathname of a file into which the index should be written
    new_index_filename: PathBuf,
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

    if File::open(&args.old_index_filename).is_err() {
        eprintln!("indexFile {} is not readable", args.old_index_filename.display());
        return ExitCode::FAILURE;
    }
    if File::create(&args.new_index_filename).is_err() {
        eprintln!("indexFile {} is not writable", args.new_index_filename.display());
        return ExitCode::FAILURE;
    }

    let Some(index) = Index::load(&args.old_index_filename) else {
        eprintln!("indexFile {} is not readable", args.old_index_filename.display());
        return ExitCode::FAILURE;
    };

    index.save(&args.new_index_filename);

    ExitCode::SUCCESS
}
