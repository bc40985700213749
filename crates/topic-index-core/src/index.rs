//! Word frequency index.
//!
//! One [`WordEntry`] per distinct normalized word, tracking how often it
//! occurs and in how many distinct sentences. Entries are never removed.

use std::collections::HashMap;

/// Usage statistics for one normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    count: u64,
    sentence_count: u64,
    last_sentence_seen: Option<u64>,
}

impl WordEntry {
    fn new(word: String) -> Self {
        Self {
            word,
            count: 0,
            sentence_count: 0,
            last_sentence_seen: None,
        }
    }

    /// The normalized word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Total occurrences across the stream.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Number of distinct sentences containing the word.
    pub const fn sentence_count(&self) -> u64 {
        self.sentence_count
    }

    fn record(&mut self, sentence: u64) {
        self.count += 1;
        if self.last_sentence_seen != Some(sentence) {
            self.sentence_count += 1;
            self.last_sentence_seen = Some(sentence);
        }
    }
}

/// Accumulates [`WordEntry`] statistics keyed by normalized word.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    entries: HashMap<String, WordEntry>,
}

impl FrequencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` in `sentence`.
    ///
    /// Sentence ids must be non-decreasing across calls, as produced by the
    /// tokenizer; a word is counted once per run of equal ids.
    pub fn observe(&mut self, word: &str, sentence: u64) {
        if let Some(entry) = self.entries.get_mut(word) {
            entry.record(sentence);
            return;
        }
        let mut entry = WordEntry::new(word.to_owned());
        entry.record(sentence);
        self.entries.insert(word.to_owned(), entry);
    }

    /// Look up the entry for an already normalized word.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    /// Borrow every entry, in no particular order.
    pub fn snapshot(&self) -> Vec<&WordEntry> {
        self.entries.values().collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
