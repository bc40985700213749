//! Stop words excluded from the "other words" ranking.
//!
//! Stop words still count toward every total; they are only skipped when
//! picking the most frequent words besides the topic.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::tokenizer::normalize;

/// Built-in English function words, stored in normalized form.
///
/// The pronoun `i` is not on the list and ranks like any other word.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "you", "me",
        "my", "we", "our", "they", "their", "them", "this", "those", "these", "your", "yours",
        "his", "her", "hers", "him", "she", "who", "whom", "what", "which", "when", "where", "why",
        "how", "if", "or", "but", "not",
    ]
    .into_iter()
    .collect()
});

/// Check whether a normalized word is in the built-in stop list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// The built-in stop list extended with configured words.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    extra: HashSet<String>,
}

impl StopWords {
    /// Build a stop list from the built-in words plus `extra`.
    ///
    /// Extra words are normalized the same way tokens are, so `"Also"` and
    /// `"also!"` both exclude `also`. Words that normalize to nothing are dropped.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = extra
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty() && !is_stop_word(w))
            .collect();
        Self { extra }
    }

    /// The built-in stop list with nothing added.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Check whether a normalized word should be skipped.
    pub fn is_stop_word(&self, word: &str) -> bool {
        is_stop_word(word) || self.extra.contains(word)
    }

    /// Number of configured words on top of the built-in list.
    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }
}
