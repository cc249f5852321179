use std::collections::HashSet;

use indexmap::IndexSet;

/// Text normalization used by the engine.
/// Turns raw text into the terms that make up vector dimensions.
///
/// The engine only ever calls `normalize`, so an implementation is free to
/// stem, fold case, or apply a language specific tokenizer.
pub trait TextNormalizer: Send + Sync {
    /// split text into tokens
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// drop tokens without search value
    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String>;

    /// tokenize + stopword removal
    #[inline]
    fn normalize(&self, text: &str) -> Vec<String> {
        self.remove_stopwords(self.tokenize(text))
    }
}

/// English stopwords used by `DefaultNormalizer::new`
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Default normalizer
/// - splits on every non alphanumeric character (Unicode aware, so `café` stays one token)
/// - lowercases
/// - removes stopwords (exact match after lowercasing)
#[derive(Debug, Clone)]
pub struct DefaultNormalizer {
    stopwords: HashSet<Box<str>>,
}

impl DefaultNormalizer {
    /// normalizer with the English stopword list
    pub fn new() -> Self {
        Self::with_stopwords(ENGLISH_STOPWORDS)
    }

    /// normalizer with a caller supplied stopword list
    pub fn with_stopwords<T>(stopwords: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .iter()
                .map(|w| w.as_ref().to_lowercase().into_boxed_str())
                .collect(),
        }
    }

    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

impl Default for DefaultNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer for DefaultNormalizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}

/// Remove duplicates, keeping the first occurrence order
pub fn remove_duplicates<T>(tokens: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_and_lowercases() {
        let n = DefaultNormalizer::with_stopwords::<&str>(&[]);
        assert_eq!(
            n.tokenize("The Cat, sat; on-the MAT."),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
        assert!(n.tokenize("  ,;. ").is_empty());
    }

    #[test]
    fn tokenize_keeps_unicode_letters() {
        let n = DefaultNormalizer::with_stopwords::<&str>(&[]);
        assert_eq!(n.tokenize("Café naïve/über"), vec!["café", "naïve", "über"]);
    }

    #[test]
    fn stopwords_are_removed_case_insensitively() {
        let n = DefaultNormalizer::with_stopwords(&["The"]);
        assert_eq!(n.normalize("the cat THE sat"), vec!["cat", "sat"]);
    }

    #[test]
    fn english_list_drops_common_words() {
        let n = DefaultNormalizer::new();
        assert_eq!(n.normalize("A cat is a fine pet"), vec!["cat", "fine", "pet"]);
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        assert_eq!(
            remove_duplicates(&["cat", "sat", "cat", "dog", "sat"]),
            vec!["cat", "sat", "dog"]
        );
        assert!(remove_duplicates::<&str>(&[]).is_empty());
    }
}
