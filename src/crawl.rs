//! crawl - the crawl engine: a frontier-driven, bounded-depth traversal of
//! "internal" URLs starting from a seed, with deduplication and an ordered
//! persistence format (see `pagedir`).

use std::collections::{HashSet, VecDeque};
use std::path::Path;

use crate::error::CrawlError;
use crate::pagedir::{self, Page};
use crate::urlnorm::{self, Scope};

/// Fetches a URL to HTML, or `None` on failure. Implemented by
/// `fetch::fetch` in production; a trait lets tests substitute a canned
/// fixture instead of making real network calls.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Option<String>;
    fn links(&self, html: &str, base_url: &str) -> Vec<String>;
}

/// The production fetcher, backed by `reqwest`/`scraper`.
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        crate::fetch::fetch(url)
    }

    fn links(&self, html: &str, base_url: &str) -> Vec<String> {
        crate::fetch::links_of(html, base_url)
    }
}

/// The crawl engine's mutable traversal state.
pub struct Engine<F: Fetcher> {
    fetcher: F,
    scope: Scope,
    frontier: VecDeque<(String, u32)>,
    seen: HashSet<String>,
    next_doc_id: u32,
    max_depth: u32,
}

impl<F: Fetcher> Engine<F> {
    /// Build a new engine from a seed URL, fetcher, and depth bound.
    /// Fails if the seed can't be normalized or isn't internal to itself.
    pub fn new(fetcher: F, seed_url: &str, max_depth: u32) -> Result<Self, CrawlError> {
        let normalized = urlnorm::normalize(seed_url).ok_or(CrawlError::SeedNotNormalizable)?;
        let scope = Scope::from_seed(&normalized).ok_or(CrawlError::SeedNotNormalizable)?;
        if !scope.is_internal(&normalized) {
            return Err(CrawlError::SeedNotInternal(normalized));
        }

        let mut seen = HashSet::new();
        seen.insert(normalized.clone());
        let mut frontier = VecDeque::new();
        frontier.push_back((normalized, 0));

        Ok(Engine {
            fetcher,
            scope,
            frontier,
            seen,
            next_doc_id: 1,
            max_depth,
        })
    }

    /// Run the crawl to completion, persisting every successfully fetched
    /// page under `page_dir`. Returns the number of pages persisted.
    pub fn run(&mut self, page_dir: &Path) -> Result<u32, CrawlError> {
        let mut persisted = 0u32;

        while let Some((url, depth)) = self.frontier.pop_front() {
            let Some(html) = self.fetcher.fetch(&url) else {
                continue;
            };
            println!("{depth}\tFetched: {url}");

            let page = Page {
                url: url.clone(),
                depth,
                html,
            };
            pagedir::save(&page, page_dir, self.next_doc_id)?;
            self.next_doc_id += 1;
            persisted += 1;

            if depth < self.max_depth {
                println!("{depth}\tScanning: {url}");
                self.scan(&page);
            }
        }

        Ok(persisted)
    }

    /// Extract links from a fetched page, discard external/duplicate ones,
    /// and enqueue the rest at `page.depth + 1`.
    fn scan(&mut self, page: &Page) {
        for raw_link in self.fetcher.links(&page.html, &page.url) {
            let Some(normalized) = urlnorm::normalize(&raw_link) else {
                continue;
            };
            println!("{}\tFound: {normalized}", page.depth);

            if !self.scope.is_internal(&normalized) {
                println!("{}\tIgnExtrn: {normalized}", page.depth);
                continue;
            }

            if !self.seen.insert(normalized.clone()) {
                println!("{}\tIgnDupl: {normalized}", page.depth);
                continue;
            }

            self.frontier.push_back((normalized.clone(), page.depth + 1));
            println!("{}\tAdded: {normalized}", page.depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// A fetcher backed by an in-memory site map, for deterministic tests.
    struct FakeSite {
        pages: HashMap<String, (String, Vec<String>)>, // url -> (html, links)
        fetched: RefCell<Vec<String>>,
    }

    impl Fetcher for FakeSite {
        fn fetch(&self, url: &str) -> Option<String> {
            self.fetched.borrow_mut().push(url.to_string());
            self.pages.get(url).map(|(html, _)| html.clone())
        }

        fn links(&self, _html: &str, base_url: &str) -> Vec<String> {
            self.pages
                .get(base_url)
                .map(|(_, links)| links.clone())
                .unwrap_or_default()
        }
    }

    fn site(pages: &[(&str, &[&str])]) -> FakeSite {
        let mut map = HashMap::new();
        for (url, links) in pages {
            map.insert(
                url.to_string(),
                (
                    "<html></html>".to_string(),
                    links.iter().map(|l| l.to_string()).collect(),
                ),
            );
        }
        FakeSite {
            pages: map,
            fetched: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn respects_depth_bound() {
        let fetcher = site(&[
            ("https://ex.com/", &["https://ex.com/a"]),
            ("https://ex.com/a", &["https://ex.com/b"]),
            ("https://ex.com/b", &[]),
        ]);
        let mut engine = Engine::new(fetcher, "https://ex.com/", 1).unwrap();
        let dir = tempfile::tempdir().unwrap();
        pagedir::init(dir.path());
        let persisted = engine.run(dir.path()).unwrap();

        // seed (depth 0) fetched and scanned; "a" (depth 1) fetched but not
        // scanned since depth == max_depth; "b" never discovered.
        assert_eq!(persisted, 2);
        assert!(pagedir::load(dir.path(), 1).is_some());
        assert!(pagedir::load(dir.path(), 2).is_some());
        assert!(pagedir::load(dir.path(), 3).is_none());
    }

    #[test]
    fn dedups_by_normalized_url() {
        let fetcher = site(&[
            (
                "https://ex.com/",
                &["https://ex.com/a", "https://ex.com/a#frag"],
            ),
            ("https://ex.com/a", &[]),
        ]);
        let mut engine = Engine::new(fetcher, "https://ex.com/", 3).unwrap();
        let dir = tempfile::tempdir().unwrap();
        pagedir::init(dir.path());
        let persisted = engine.run(dir.path()).unwrap();
        assert_eq!(persisted, 2); // seed + "a" once, not twice
    }

    #[test]
    fn external_links_are_not_persisted() {
        let fetcher = site(&[("https://ex.com/", &["https://other.com/x"])]);
        let mut engine = Engine::new(fetcher, "https://ex.com/", 3).unwrap();
        let dir = tempfile::tempdir().unwrap();
        pagedir::init(dir.path());
        let persisted = engine.run(dir.path()).unwrap();
        assert_eq!(persisted, 1);
    }

    #[test]
    fn rejects_non_internal_seed() {
        // A seed with no reachable host at all fails normalization outright.
        let fetcher = site(&[]);
        assert!(Engine::new(fetcher, "not a url", 1).is_err());
    }
}
