//! query::eval - set-algebra evaluator and ranker over posting lists.
//!
//! score(d) = sum over and-sequences of (min over word in and-sequence of
//! count(word, d)), treating an absent word as count 0.

use std::collections::HashMap;

use crate::index::{Index, PostingList};

/// Transient docID -> score map produced during evaluation.
pub type ScoreMap = HashMap<u32, u32>;

const AND: &str = "and";
const OR: &str = "or";

/// Evaluate a validated token stream against `index`, returning the final
/// per-docID score map.
pub fn evaluate(tokens: &[String], index: &Index) -> ScoreMap {
    let mut pages = ScoreMap::new();
    let mut i = 0;

    while i < tokens.len() {
        let mut temp: ScoreMap = index.get(&tokens[i]).clone();
        i += 1;

        while i < tokens.len() && tokens[i] != OR {
            if tokens[i] == AND {
                i += 1;
                continue;
            }
            temp = intersect(&temp, index.get(&tokens[i]));
            i += 1;
        }

        union(&mut pages, &temp);

        if i < tokens.len() && tokens[i] == OR {
            i += 1;
        }
    }

    pages
}

/// Per-docID minimum of `a` and a word's posting list `b`; docIDs absent
/// from either side are absent from the result.
pub fn intersect(a: &ScoreMap, b: &PostingList) -> ScoreMap {
    a.iter()
        .filter_map(|(doc_id, count_a)| {
            b.get(doc_id).map(|count_b| (*doc_id, (*count_a).min(*count_b)))
        })
        .collect()
}

/// Per-docID sum of `a` and `b`, written into `a` in place.
pub fn union(a: &mut ScoreMap, b: &ScoreMap) {
    for (doc_id, score) in b {
        *a.entry(*doc_id).or_insert(0) += score;
    }
}

/// Repeatedly extract the maximum-score entry from `scores` until none
/// remain with a positive score. Ties broken by the lower docID.
pub fn rank(scores: &ScoreMap) -> Vec<(u32, u32)> {
    let mut remaining: ScoreMap = scores.clone();
    let mut ranked = Vec::new();

    loop {
        let best = remaining
            .iter()
            .filter(|(_, &score)| score > 0)
            .max_by(|(id_a, score_a), (id_b, score_b)| {
                score_a.cmp(score_b).then(id_b.cmp(id_a))
            })
            .map(|(&id, &score)| (id, score));

        match best {
            Some((doc_id, score)) => {
                ranked.push((doc_id, score));
                remaining.insert(doc_id, 0);
            }
            None => break,
        }
    }

    ranked
}
