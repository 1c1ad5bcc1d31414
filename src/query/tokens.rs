//! query::tokens - tokenizer and grammar validator for the boolean query
//! mini-language:
//!
//! ```text
//! query       ::= orSequence
//! orSequence  ::= andSequence ( "or" andSequence )*
//! andSequence ::= word ( ("and")? word )*
//! word        ::= [A-Za-z]+
//! ```

use crate::error::QueryError;
use crate::word;

const AND: &str = "and";
const OR: &str = "or";

fn is_operator(token: &str) -> bool {
    token == AND || token == OR
}

/// Split `query` into lowercase tokens (letter runs), rejecting any
/// character that is neither a letter nor whitespace. An empty token list
/// means an empty query — not an error, the caller treats it as a silent
/// no-match.
pub fn tokenize(query: &str) -> Result<Vec<String>, QueryError> {
    for c in query.chars() {
        if !c.is_ascii_alphabetic() && !c.is_whitespace() {
            return Err(QueryError::BadCharacter(c));
        }
    }

    Ok(query
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|s| !s.is_empty())
        .map(word::normalize)
        .collect())
}

/// Validate that operators aren't first, last, or adjacent. Assumes
/// `tokens` is non-empty (callers should treat an empty token list as a
/// no-match before calling this).
pub fn validate(tokens: &[String]) -> Result<(), QueryError> {
    if let Some(first) = tokens.first() {
        if is_operator(first) {
            return Err(QueryError::OperatorFirst(first.clone()));
        }
    }

    if let Some(last) = tokens.last() {
        if is_operator(last) {
            return Err(QueryError::OperatorLast(last.clone()));
        }
    }

    for window in tokens.windows(2) {
        if is_operator(&window[0]) && is_operator(&window[1]) {
            return Err(QueryError::AdjacentOperators(
                window[0].clone(),
                window[1].clone(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_and_lowercases() {
        assert_eq!(
            tokenize("Dog and Cat").unwrap(),
            vec!["dog", "and", "cat"]
        );
    }

    #[test]
    fn empty_query_has_no_tokens() {
        assert_eq!(tokenize("   ").unwrap(), Vec::<String>::new());
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn rejects_bad_characters() {
        assert_eq!(tokenize("cat$").unwrap_err(), QueryError::BadCharacter('$'));
    }

    #[test]
    fn rejects_operator_first() {
        let tokens = tokenize("and cat").unwrap();
        assert_eq!(
            validate(&tokens).unwrap_err(),
            QueryError::OperatorFirst("and".to_string())
        );
    }

    #[test]
    fn rejects_operator_last() {
        let tokens = tokenize("cat or").unwrap();
        assert_eq!(
            validate(&tokens).unwrap_err(),
            QueryError::OperatorLast("or".to_string())
        );
    }

    #[test]
    fn rejects_adjacent_operators() {
        let tokens = tokenize("cat or and bird").unwrap();
        assert_eq!(
            validate(&tokens).unwrap_err(),
            QueryError::AdjacentOperators("or".to_string(), "and".to_string())
        );
    }

    #[test]
    fn accepts_implicit_and() {
        let tokens = tokenize("cat bird").unwrap();
        assert!(validate(&tokens).is_ok());
    }

    #[test]
    fn tokenize_is_idempotent_when_rejoined() {
        let tokens = tokenize("Dog and Cat or Bird").unwrap();
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined).unwrap(), tokens);
    }
}
