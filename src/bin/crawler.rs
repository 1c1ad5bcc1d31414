//! crawler - bounded-depth web traversal from a seed URL.
//!
//! Usage: crawler <seedURL> <pageDirectory> <maxDepth>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tse::crawl::{Engine, HttpFetcher};
use tse::pagedir;

#[derive(Parser)]
#[command(
    name = "crawler",
    about = "Crawl an internal slice of a site, starting from a seed URL"
)]
struct Args {
    /// 'internal' URL to use as the initial seed
    seed_url: String,

    /// existing directory in which to write downloaded pages
    page_directory: PathBuf,

    /// integer in range [0..10] indicating the maximum crawl depth
    max_depth: u32,
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

    if args.max_depth > 10 {
        eprintln!("maxDepth must be in range [0..10]");
        return ExitCode::FAILURE;
    }

    if let Err(e) = pagedir::init_or_err(&args.page_directory) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut engine = match Engine::new(HttpFetcher, &args.seed_url, args.max_depth) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match engine.run(&args.page_directory) {
        Ok(persisted) => {
            tracing::info!(persisted, "crawl complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
