//! Token filtering for the topic extractor.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The standard English stop-word list.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Additional noise words common on web pages that carry no topical signal.
const NOISE_WORDS: &[&str] = &[
    "click", "please", "read", "more", "also", "like", "get", "use", "new", "one", "two",
    "first", "will", "may", "can", "make", "see", "know", "way", "time", "year", "day",
    "back", "come", "go", "take", "want", "need", "look", "give", "think", "good", "well",
    "right", "say", "said", "says", "us", "re", "ve", "ll", "don",
];

static FILTERED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    STOP_WORDS.iter().chain(NOISE_WORDS.iter()).copied().collect()
});

/// True for tokens the extractor should drop before scoring.
pub fn is_filtered(token: &str) -> bool {
    FILTERED.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_filtered() {
        assert!(is_filtered("the"));
        assert!(is_filtered("because"));
        assert!(is_filtered("themselves"));
    }

    #[test]
    fn noise_words_are_filtered() {
        assert!(is_filtered("click"));
        assert!(is_filtered("said"));
    }

    #[test]
    fn content_words_survive() {
        assert!(!is_filtered("rust"));
        assert!(!is_filtered("shoes"));
        assert!(!is_filtered("election"));
    }
}
