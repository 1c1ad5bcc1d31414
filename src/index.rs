//! index - an in-memory inverted index (word -> {docID -> count}), with a
//! stable textual save/load format.
//!
//! The textual format is the stable contract between the indexer and the
//! querier; the in-memory representation (`HashMap` of `HashMap`s) is free
//! to change as long as save/load preserves the full (word, docID, count)
//! triple set.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

/// A word's posting list: docID -> occurrence count.
pub type PostingList = HashMap<u32, u32>;

fn empty_postings() -> &'static PostingList {
    static EMPTY: OnceLock<PostingList> = OnceLock::new();
    EMPTY.get_or_init(PostingList::new)
}

/// The in-memory inverted index.
#[derive(Debug, Default, Clone)]
pub struct Index {
    words: HashMap<String, PostingList>,
}

impl Index {
    /// An empty index.
    pub fn new() -> Self {
        Index {
            words: HashMap::new(),
        }
    }

    /// Increment the posting for `(word, doc_id)` by one, creating the
    /// word's entry and/or posting list as needed. No-op if `doc_id == 0`.
    pub fn add(&mut self, word: &str, doc_id: u32) {
        if doc_id < 1 {
            return;
        }
        let postings = self.words.entry(word.to_string()).or_default();
        *postings.entry(doc_id).or_insert(0) += 1;
    }

    /// Set the posting for `(word, doc_id)` to exactly `count`. No-op if
    /// `doc_id == 0` or `count < 0`.
    pub fn set(&mut self, word: &str, doc_id: u32, count: i64) {
        if doc_id < 1 || count < 0 {
            return;
        }
        let postings = self.words.entry(word.to_string()).or_default();
        postings.insert(doc_id, count as u32);
    }

    /// The posting list for `word`, or an empty one if `word` is absent.
    pub fn get(&self, word: &str) -> &PostingList {
        self.words.get(word).unwrap_or_else(|| empty_postings())
    }

    /// Iterate over every `(word, posting_list)` pair in the index.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PostingList)> {
        self.words.iter()
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Write the textual index format to `path`. Silently does nothing if
    /// `path` can't be opened for writing (bad path is a documented no-op,
    /// not an error).
    pub fn save(&self, path: &Path) {
        let Ok(file) = File::create(path) else {
            return;
        };
        let mut writer = BufWriter::new(file);
        for (word, postings) in &self.words {
            let _ = write!(writer, "{word} ");
            for (doc_id, count) in postings {
                let _ = write!(writer, "{doc_id} {count} ");
            }
            let _ = writeln!(writer);
        }
    }

    /// Load an index from the textual format at `path`, or `None` if the
    /// path doesn't exist or isn't readable.
    pub fn load(path: &Path) -> Option<Index> {
        let file = File::open(path).ok()?;
        let reader = BufReader::new(file);
        let mut index = Index::new();

        for line in reader.lines() {
            let line = line.ok()?;
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let pairs: Vec<&str> = parts.collect();
            for chunk in pairs.chunks(2) {
                if let [doc_id_str, count_str] = chunk {
                    if let (Ok(doc_id), Ok(count)) =
                        (doc_id_str.parse::<u32>(), count_str.parse::<i64>())
                    {
                        index.set(word, doc_id, count);
                    }
                }
            }
        }

        Some(index)
    }
}

/// Sweep a page directory and build an index from every page file found,
/// tokenizing via `word_iter` (a word-extraction closure over a page's
/// HTML). This is the Indexer Driver: sequential, docID-ascending, stopping
/// at the first missing docID.
pub fn build_from_pagedir<F, I>(dir: &Path, mut word_iter: F) -> Index
where
    F: FnMut(&str) -> I,
    I: Iterator<Item = String>,
{
    let mut index = Index::new();
    let mut doc_id = 1u32;
    while let Some(page) = crate::pagedir::load(dir, doc_id) {
        for token in word_iter(&page.html) {
            if crate::word::is_indexable(&token) {
                index.add(&crate::word::normalize(&token), doc_id);
            }
        }
        doc_id += 1;
    }
    index
}
