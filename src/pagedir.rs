//! pagedir - initialize, save, validate, and load pages in a page directory.
//!
//! The on-disk contract: a directory holding a zero-length `.crawler`
//! sentinel and one file per persisted page, named by its decimal docID
//! with no padding. `dir/<docID>` holds `url\n depth\n html` with no
//! trailing newline appended after `html`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::PagedirError;

/// A fetched or loaded web page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub html: String,
}

const SENTINEL: &str = ".crawler";

fn page_path(dir: &Path, doc_id: u32) -> PathBuf {
    dir.join(doc_id.to_string())
}

/// Create or overwrite `dir/.crawler`. Returns `false` if the sentinel file
/// can't be opened for writing.
pub fn init(dir: &Path) -> bool {
    File::create(dir.join(SENTINEL)).is_ok()
}

/// Write `page` to `dir/<doc_id>`.
pub fn save(page: &Page, dir: &Path, doc_id: u32) -> Result<(), PagedirError> {
    let path = page_path(dir, doc_id);
    let mut file =
        File::create(&path).map_err(|e| PagedirError::Io(path.clone(), e))?;
    write!(file, "{}\n{}\n{}", page.url, page.depth, page.html)
        .map_err(|e| PagedirError::Io(path, e))
}

/// True iff both `dir/.crawler` and `dir/1` are readable. Per the original
/// contract this is a shallow check; a directory with those two files and
/// arbitrary other contents still passes.
pub fn validate(dir: &Path) -> bool {
    readable(&dir.join(SENTINEL)) && readable(&dir.join("1"))
}

fn readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

/// Load the page stored under `doc_id`, or `None` if it doesn't exist or
/// isn't readable.
pub fn load(dir: &Path, doc_id: u32) -> Option<Page> {
    let path = page_path(dir, doc_id);
    let file = File::open(&path).ok()?;
    let mut reader = BufReader::new(file);

    let mut url = String::new();
    reader.read_line(&mut url).ok()?;
    let url = url.trim_end_matches('\n').to_string();

    let mut depth_line = String::new();
    reader.read_line(&mut depth_line).ok()?;
    let depth: u32 = depth_line.trim_end_matches('\n').parse().ok()?;

    let mut html = String::new();
    reader.read_to_string(&mut html).ok()?;

    Some(Page { url, depth, html })
}

/// Open a page file directly, e.g. for the ranker to read just the URL
/// line without paying for a full HTML parse.
pub fn open(dir: &Path, doc_id: u32) -> Result<File, PagedirError> {
    let path = page_path(dir, doc_id);
    File::open(&path).map_err(|e| PagedirError::Io(path, e))
}

/// Read just the first line (the URL) of a page file.
pub fn read_url(dir: &Path, doc_id: u32) -> Result<String, PagedirError> {
    let file = open(dir, doc_id)?;
    let mut reader = BufReader::new(file);
    let mut url = String::new();
    reader
        .read_line(&mut url)
        .map_err(|e| PagedirError::Io(page_path(dir, doc_id), e))?;
    Ok(url.trim_end_matches('\n').to_string())
}

/// Ensure `dir` exists and create/overwrite its `.crawler` sentinel,
/// surfacing a descriptive error on failure (used by the crawler binary).
pub fn init_or_err(dir: &Path) -> Result<(), PagedirError> {
    if !dir.is_dir() {
        return Err(PagedirError::InitFailed(dir.to_path_buf()));
    }
    if init(dir) {
        Ok(())
    } else {
        Err(PagedirError::InitFailed(dir.to_path_buf()))
    }
}

/// Ensure `dir` is crawler-produced, surfacing a descriptive error.
pub fn validate_or_err(dir: &Path) -> Result<(), PagedirError> {
    if validate(dir) {
        Ok(())
    } else {
        Err(PagedirError::NotCrawlerProduced(dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_creates_sentinel() {
        let dir = tempdir().unwrap();
        assert!(init(dir.path()));
        assert!(dir.path().join(SENTINEL).exists());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        init(dir.path());
        let page = Page {
            url: "https://ex/a".to_string(),
            depth: 2,
            html: "<html>hi\nthere</html>".to_string(),
        };
        save(&page, dir.path(), 1).unwrap();
        let loaded = load(dir.path(), 1).unwrap();
        assert_eq!(loaded, page);
    }

    #[test]
    fn load_missing_is_none() {
        let dir = tempdir().unwrap();
        assert!(load(dir.path(), 1).is_none());
    }

    #[test]
    fn validate_requires_sentinel_and_doc_one() {
        let dir = tempdir().unwrap();
        assert!(!validate(dir.path()));
        init(dir.path());
        assert!(!validate(dir.path()));
        let page = Page {
            url: "https://ex/a".to_string(),
            depth: 0,
            html: "x".to_string(),
        };
        save(&page, dir.path(), 1).unwrap();
        assert!(validate(dir.path()));
    }

    #[test]
    fn files_are_dense_with_no_gaps() {
        let dir = tempdir().unwrap();
        init(dir.path());
        for id in 1..=3u32 {
            let page = Page {
                url: format!("https://ex/{id}"),
                depth: 0,
                html: "x".to_string(),
            };
            save(&page, dir.path(), id).unwrap();
        }
        for id in 1..=3u32 {
            assert!(load(dir.path(), id).is_some());
        }
        assert!(load(dir.path(), 4).is_none());
    }
}
