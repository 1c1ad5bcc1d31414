//! word - normalize a word for indexing and querying.
//!
//! Both the indexer and the query tokenizer normalize through this single
//! function, which is what keeps the build-time and query-time notions of
//! a "word" identical (see the normalized-word invariant in the data model).

/// Lowercases every ASCII letter in `word`. Non-letter bytes are left
/// untouched; callers are responsible for ensuring `word` is letters-only
/// before calling this (the tokenizer and indexer both only ever pass
/// letter runs here).
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// The length/alphabet threshold applied at index build time: a token must
/// be all ASCII letters and at least this long to be indexed.
pub const MIN_WORD_LEN: usize = 3;

/// True if `s` consists solely of ASCII letters and meets the minimum
/// indexable length.
pub fn is_indexable(s: &str) -> bool {
    s.len() >= MIN_WORD_LEN && s.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_letters() {
        assert_eq!(normalize("DoG"), "dog");
        assert_eq!(normalize("cat"), "cat");
    }

    #[test]
    fn is_indexable_rejects_short_words() {
        assert!(!is_indexable("ab"));
        assert!(is_indexable("abc"));
    }

    #[test]
    fn is_indexable_rejects_non_letters() {
        assert!(!is_indexable("a1c"));
        assert!(!is_indexable("a-c"));
    }
}
