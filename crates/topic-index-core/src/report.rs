//! Report structs for topic analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in the CLI JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::index::WordEntry;
use crate::select::Selection;
use crate::tokenizer::{Totals, normalize};

/// Usage of one word relative to the whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordStats {
    /// The normalized word.
    pub word: String,
    /// Total occurrences.
    pub count: u64,
    /// Number of sentences containing the word.
    pub sentence_count: u64,
    /// Share of all words, in percent.
    pub pct_words: f64,
    /// Share of all sentences containing the word, in percent.
    pub pct_sentences: f64,
}

impl WordStats {
    fn from_entry(entry: &WordEntry, totals: Totals) -> Self {
        Self {
            word: entry.word().to_owned(),
            count: entry.count(),
            sentence_count: entry.sentence_count(),
            pct_words: percent(entry.count(), totals.words),
            pct_sentences: percent(entry.sentence_count(), totals.sentences),
        }
    }
}

/// Topic usage plus the most frequent other words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TopicReport {
    /// Topic word as given by the caller.
    pub topic: String,
    /// Topic word after normalization.
    pub normalized_topic: String,
    /// Number of words in the text.
    pub total_words: u64,
    /// Number of sentences in the text.
    pub total_sentences: u64,
    /// Topic statistics, absent when the topic never occurs.
    pub topic_entry: Option<WordStats>,
    /// Most frequent non-stop, non-topic words, highest count first.
    pub others: Vec<WordStats>,
}

/// Combine selected entries and totals into a [`TopicReport`].
pub fn assemble(topic: &str, selection: &Selection<'_>, totals: Totals) -> TopicReport {
    TopicReport {
        topic: topic.to_owned(),
        normalized_topic: normalize(topic),
        total_words: totals.words,
        total_sentences: totals.sentences,
        topic_entry: selection
            .topic
            .map(|entry| WordStats::from_entry(entry, totals)),
        others: selection
            .others
            .iter()
            .map(|entry| WordStats::from_entry(entry, totals))
            .collect(),
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::FrequencyIndex;

    fn index_of(words: &[(&str, u64)]) -> FrequencyIndex {
        let mut index = FrequencyIndex::new();
        for (word, sentence) in words {
            index.observe(word, *sentence);
        }
        index
    }

    #[test]
    fn computes_percentages() {
        let index = index_of(&[("cars", 0), ("cars", 1), ("roads", 1), ("fast", 2)]);
        let selection = Selection {
            topic: index.get("cars"),
            others: vec![index.get("roads").unwrap()],
        };
        let report = assemble(
            "Cars",
            &selection,
            Totals {
                words: 8,
                sentences: 4,
            },
        );

        let topic = report.topic_entry.unwrap();
        assert_eq!(topic.word, "cars");
        assert!((topic.pct_words - 25.0).abs() < f64::EPSILON);
        assert!((topic.pct_sentences - 50.0).abs() < f64::EPSILON);
        assert_eq!(report.others.len(), 1);
        assert!((report.others[0].pct_words - 12.5).abs() < f64::EPSILON);
        assert_eq!(report.topic, "Cars");
        assert_eq!(report.normalized_topic, "cars");
    }

    #[test]
    fn zero_totals_give_zero_percent() {
        assert!(percent(3, 0).abs() < f64::EPSILON);
        assert!(percent(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_topic_stays_absent() {
        let report = assemble("cars", &Selection::default(), Totals::default());
        assert!(report.topic_entry.is_none());
        assert!(report.others.is_empty());
        assert_eq!(report.total_words, 0);
    }

    #[test]
    fn serializes_missing_topic_as_null() {
        let report = assemble("cars", &Selection::default(), Totals::default());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["topic_entry"].is_null());
        assert_eq!(json["others"], serde_json::json!([]));
    }

    #[test]
    fn schema_describes_report_fields() {
        let schema = serde_json::to_string(&schemars::schema_for!(TopicReport)).unwrap();
        assert!(schema.contains("total_sentences"));
        assert!(schema.contains("pct_words"));
    }
}
