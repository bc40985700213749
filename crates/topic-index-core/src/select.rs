//! Topic lookup and top-k selection of other frequent words.

use std::cmp::Ordering;

use crate::index::{FrequencyIndex, WordEntry};
use crate::stop_words::StopWords;
use crate::tokenizer::normalize;

/// How many non-topic words a report lists by default.
pub const DEFAULT_OTHER_WORDS: usize = 4;

/// Entries picked for a report, borrowed from the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Entry for the topic word, if it occurs at all.
    pub topic: Option<&'a WordEntry>,
    /// Most frequent non-stop, non-topic words, highest count first.
    pub others: Vec<&'a WordEntry>,
}

/// Ranking order: count descending, then word ascending.
fn by_rank(a: &&WordEntry, b: &&WordEntry) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.word().cmp(b.word()))
}

/// Find the topic entry and up to `limit` other words.
///
/// `topic` is normalized like a token first. A topic that is not in the
/// index yields `topic: None`; the other words are picked the same way
/// either way.
#[tracing::instrument(skip(index, stop_words), fields(vocabulary = index.len()))]
pub fn select<'a>(
    index: &'a FrequencyIndex,
    topic: &str,
    stop_words: &StopWords,
    limit: usize,
) -> Selection<'a> {
    let topic = normalize(topic);
    let topic_entry = if topic.is_empty() {
        None
    } else {
        index.get(&topic)
    };

    let mut ranked = index.snapshot();
    ranked.sort_by(by_rank);

    let others = ranked
        .into_iter()
        .filter(|e| e.word() != topic && !stop_words.is_stop_word(e.word()))
        .take(limit)
        .collect();

    Selection {
        topic: topic_entry,
        others,
    }
}
