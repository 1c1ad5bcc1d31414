//! fetch - concretizes the "external" fetcher/extractor collaborator
//! spec.md assumes is available as a library exposing `fetch`, `next_url`,
//! and `next_word`. Backed by `reqwest`'s blocking client (the crawl engine
//! is single-threaded by design) and `scraper` for HTML parsing.

use ego_tree::iter::Edge;
use regex::Regex;
use scraper::{Html, Node, Selector};
use std::sync::OnceLock;
use std::time::Duration;

/// Fetch `url` and return its response body, or `None` on any failure
/// (network error, non-2xx status, non-HTML content type) — mirroring the
/// crawl engine's "fetch failure is silent" contract.
pub fn fetch(url: &str) -> Option<String> {
    let client = client();
    let response = client.get(url).send().ok()?;

    if !response.status().is_success() {
        return None;
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("text/html"))
        .unwrap_or(true);
    if !is_html {
        return None;
    }

    response.text().ok()
}

fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("tse-crawler/0.1")
        .build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new())
}

fn link_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("valid selector"))
}

/// Every absolute link URL discoverable in `html`, resolved against
/// `base_url`. Relative hrefs that don't resolve are skipped.
pub fn links_of(html: &str, base_url: &str) -> Vec<String> {
    let base = match url::Url::parse(base_url) {
        Ok(u) => u,
        Err(_) => return Vec::new(),
    };
    let document = Html::parse_document(html);

    document
        .select(link_selector())
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|u| u.to_string())
        .collect()
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("valid regex"))
}

/// True if `node` is a `<script>` or `<style>` element.
fn is_non_visible_element(node: &Node) -> bool {
    node.as_element()
        .map(|el| matches!(el.name(), "script" | "style"))
        .unwrap_or(false)
}

/// The visible text of `html`: every text node not nested under a
/// `<script>` or `<style>` element, joined with spaces in document order.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    let mut skip_depth = 0usize;

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) if is_non_visible_element(node.value()) => skip_depth += 1,
            Edge::Close(node) if is_non_visible_element(node.value()) => skip_depth -= 1,
            Edge::Open(node) if skip_depth == 0 => {
                if let Some(chunk) = node.value().as_text() {
                    text.push_str(chunk);
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    text
}

/// Every letter-run "word" in the visible text of `html`, in document
/// order. Script/style contents are excluded.
pub fn words_of(html: &str) -> impl Iterator<Item = String> {
    let document = Html::parse_document(html);
    let text = visible_text(&document);
    let words: Vec<String> = word_regex()
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();
    words.into_iter()
}
