//! Topic extraction: a weighted corpus ranked by single-document TF-IDF.
//!
//! High-signal fields are repeated into the corpus so plain frequency
//! counting favors them; candidates (unigrams and contiguous bigrams) are
//! scored with log-dampened term frequency and returned best-first. The
//! single page is the only document, so the inverse-document-frequency factor
//! degenerates to a constant; the formula is reimplemented directly rather
//! than pulled from a multi-document text-mining library.

pub mod stopwords;

use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::iter::repeat_n;
use std::sync::LazyLock;

use crate::parser::FieldRecord;

/// Maximum number of topics returned.
const MAX_TOPICS: usize = 15;
/// Candidate vocabulary cap; bounds scoring cost on very large pages.
const MAX_VOCABULARY: usize = 200;
/// Only the head of the body text feeds the corpus, for the same reason.
const BODY_CHAR_CAP: usize = 10_000;

/// Corpus repetition weights. Weighting is literal repetition of the field
/// text, so frequency counting needs no separate weight parameter.
const TITLE_WEIGHT: usize = 5;
const DESCRIPTION_WEIGHT: usize = 3;
const OG_TITLE_WEIGHT: usize = 3;
const OG_DESCRIPTION_WEIGHT: usize = 2;
const H1_WEIGHT: usize = 4;
const H2_WEIGHT: usize = 2;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{3,}").expect("token regex"));

/// Ranked topic list for one page: up to 15 terms or two-word phrases,
/// highest relevance first, no duplicates. Deterministic, and total: a page
/// with no scorable text yields an empty list.
pub fn extract_topics(record: &FieldRecord) -> Vec<String> {
    let corpus = build_corpus(record);
    if corpus.trim().is_empty() {
        return Vec::new();
    }
    let tokens = tokenize(&corpus);
    if tokens.is_empty() {
        return Vec::new();
    }
    rank_terms(&tokens)
}

/// Concatenate the record's fields into one blob, repeating the high-signal
/// fields so they dominate term frequency.
fn build_corpus(record: &FieldRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(title) = &record.title {
        parts.extend(repeat_n(title.as_str(), TITLE_WEIGHT));
    }
    if let Some(description) = &record.description {
        parts.extend(repeat_n(description.as_str(), DESCRIPTION_WEIGHT));
    }
    if let Some(og_title) = &record.og_title {
        parts.extend(repeat_n(og_title.as_str(), OG_TITLE_WEIGHT));
    }
    if let Some(og_description) = &record.og_description {
        parts.extend(repeat_n(og_description.as_str(), OG_DESCRIPTION_WEIGHT));
    }
    for heading in &record.h1_tags {
        parts.extend(repeat_n(heading.as_str(), H1_WEIGHT));
    }
    for heading in &record.h2_tags {
        parts.extend(repeat_n(heading.as_str(), H2_WEIGHT));
    }

    // body contributes once, capped
    let body = head_chars(&record.body_text, BODY_CHAR_CAP);
    if !body.is_empty() {
        parts.push(body);
    }

    parts.join(" ")
}

/// Lower-case and split into runs of 3+ alphabetic characters, dropping stop
/// and noise words. Digits and punctuation act as separators.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|token| !stopwords::is_filtered(token))
        .collect()
}

/// Score unigrams and contiguous bigrams with log-dampened term frequency
/// and return the best terms in descending order.
fn rank_terms(tokens: &[String]) -> Vec<String> {
    let mut frequencies: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.clone()).or_default() += 1;
    }
    for pair in tokens.windows(2) {
        *frequencies.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1;
    }

    // vocabulary cap: most frequent terms first, lexicographic within a count
    let mut vocabulary: Vec<(String, u64)> = frequencies.into_iter().collect();
    vocabulary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    vocabulary.truncate(MAX_VOCABULARY);

    // candidates stay in lexicographic order; the descending sort below is
    // stable, so equal scores resolve alphabetically
    vocabulary.sort_by(|a, b| a.0.cmp(&b.0));

    let mut scored: Vec<(String, f64)> = vocabulary
        .into_iter()
        .map(|(term, count)| (term, 1.0 + (count as f64).ln()))
        .collect();

    // L2-normalise; a degenerate norm degrades to no topics rather than an error
    let norm = scored.iter().map(|(_, s)| s * s).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Vec::new();
    }
    for (_, score) in &mut scored {
        *score /= norm;
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_TOPICS)
        .filter(|(_, score)| *score > 0.0)
        .map(|(term, _)| term)
        .collect()
}

/// First `max_chars` characters of `text`, on a char boundary.
fn head_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
