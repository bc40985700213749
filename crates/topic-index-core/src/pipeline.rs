//! Single-pass topic analysis over a byte stream.
//!
//! Tokenize, index, select, assemble. Nothing is returned until the whole
//! stream has been read, so a failed read never produces a partial report.

use std::io::BufRead;

use crate::error::{AnalysisError, AnalysisResult};
use crate::index::FrequencyIndex;
use crate::report::{TopicReport, assemble};
use crate::select::{DEFAULT_OTHER_WORDS, select};
use crate::stop_words::StopWords;
use crate::tokenizer::Tokenizer;

/// Knobs for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Words skipped when ranking other words.
    pub stop_words: StopWords,
    /// How many other words to report.
    pub other_words: usize,
    /// Reject inputs larger than this many bytes. `None` (the default) reads
    /// the whole stream however long it is.
    pub max_input_bytes: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            stop_words: StopWords::builtin(),
            other_words: DEFAULT_OTHER_WORDS,
            max_input_bytes: None,
        }
    }
}

/// Analyze `reader` with respect to `topic`.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if reading fails and
/// [`AnalysisError::InputTooLarge`] if the stream is longer than
/// `options.max_input_bytes`.
#[tracing::instrument(skip(reader, options), fields(other_words = options.other_words))]
pub fn analyze_reader<R: BufRead>(
    reader: R,
    topic: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<TopicReport> {
    // Read one byte past the limit so an oversized stream is detectable.
    let limit = options.max_input_bytes.map(|max| max as u64);
    let reader = reader.take(limit.map_or(u64::MAX, |max| max.saturating_add(1)));

    let mut tokenizer = Tokenizer::new(reader);
    let mut index = FrequencyIndex::new();
    for token in tokenizer.by_ref() {
        let token = token?;
        index.observe(&token.word, token.sentence);
    }

    if let Some(max) = limit
        && tokenizer.bytes_read() > max
    {
        return Err(AnalysisError::InputTooLarge { limit: max });
    }

    let totals = tokenizer.totals();
    tracing::debug!(
        bytes = tokenizer.bytes_read(),
        words = totals.words,
        sentences = totals.sentences,
        vocabulary = index.len(),
        "input tokenized"
    );

    let selection = select(&index, topic, &options.stop_words, options.other_words);
    Ok(assemble(topic, &selection, totals))
}

/// Analyze an in-memory string.
///
/// # Errors
///
/// Only fails if `text` exceeds `options.max_input_bytes`.
pub fn analyze_str(
    text: &str,
    topic: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<TopicReport> {
    analyze_reader(text.as_bytes(), topic, options)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::*;
    use crate::config::Config;

    fn run(text: &str, topic: &str) -> TopicReport {
        analyze_str(text, topic, &AnalysisOptions::default()).unwrap()
    }

    #[test]
    fn cars_scenario() {
        let report = run("Cars are great. I love cars. Cars drive on roads.", "cars");
        assert_eq!(report.total_words, 10);
        assert_eq!(report.total_sentences, 3);
        let topic = report.topic_entry.unwrap();
        assert_eq!(topic.count, 3);
        assert_eq!(topic.sentence_count, 3);
        assert!((topic.pct_sentences - 100.0).abs() < f64::EPSILON);

        let others: Vec<&str> = report.others.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(others, ["drive", "great", "i", "love"]);
    }

    #[test]
    fn empty_input() {
        let report = run("", "anything");
        assert_eq!(report.total_words, 0);
        assert_eq!(report.total_sentences, 0);
        assert!(report.topic_entry.is_none());
        assert!(report.others.is_empty());
    }

    #[test]
    fn no_terminators_is_one_sentence() {
        let report = run("red blue red green", "red");
        assert_eq!(report.total_sentences, 1);
        let topic = report.topic_entry.unwrap();
        assert_eq!(topic.count, 2);
        assert_eq!(topic.sentence_count, 1);
    }

    #[test]
    fn topic_matches_case_insensitively() {
        let report = run("cars cars", "CARS");
        assert_eq!(report.topic_entry.unwrap().count, 2);
    }

    #[test]
    fn missing_topic_does_not_change_others() {
        let text = "Apples and pears. Apples again!";
        let with = run(text, "pears");
        let without = run(text, "bananas");
        assert!(without.topic_entry.is_none());
        assert_eq!(without.others[0].word, "apples");
        assert!(with.others.iter().all(|w| w.word != "pears"));
    }

    #[test]
    fn is_deterministic() {
        let text = "one two three four five six. six five four three two one!";
        assert_eq!(run(text, "three"), run(text, "three"));
    }

    #[test]
    fn sentence_counts_bounded_by_totals() {
        let report = run("a b a. b c? c c c! d", "c");
        for stats in report.topic_entry.iter().chain(&report.others) {
            assert!(stats.sentence_count <= stats.count);
            assert!(stats.sentence_count <= report.total_sentences);
        }
    }

    #[test]
    fn respects_other_words_option() {
        let options = AnalysisOptions {
            other_words: 2,
            ..AnalysisOptions::default()
        };
        let report = analyze_str("w x y z w x y w x w", "none", &options).unwrap();
        assert_eq!(report.others.len(), 2);
    }

    #[test]
    fn rejects_oversized_input() {
        let options = AnalysisOptions {
            max_input_bytes: Some(4),
            ..AnalysisOptions::default()
        };
        let err = analyze_str("hello world", "hello", &options).unwrap_err();
        assert!(matches!(err, AnalysisError::InputTooLarge { limit: 4 }));
    }

    #[test]
    fn accepts_input_at_limit() {
        let options = AnalysisOptions {
            max_input_bytes: Some(5),
            ..AnalysisOptions::default()
        };
        let report = analyze_str("hello", "hello", &options).unwrap();
        assert_eq!(report.total_words, 1);
    }

    #[test]
    fn default_config_reads_large_input() {
        // Larger than any buffer the tokenizer or a reader would hand back at once.
        let text = "word. ".repeat(2 * 1024 * 1024);
        let options = Config::default().analysis_options();
        assert_eq!(options.max_input_bytes, None);

        let report = analyze_str(&text, "word", &options).unwrap();
        assert_eq!(report.total_words, 2 * 1024 * 1024);
        assert_eq!(report.total_sentences, 2 * 1024 * 1024);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn surfaces_read_errors() {
        let reader = io::BufReader::new(FailingReader);
        let err = analyze_reader(reader, "x", &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
