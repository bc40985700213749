//! Report command — topic usage and the most frequent other words.

use std::fmt;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use topic_index_core::{AnalysisOptions, TopicReport, WordStats, analyze_reader};

use super::open_input;

const BANNER: &str = "=============================";
const RULE: &str = "-------------------------------------------------------------------";

/// Analyze `file` (or standard input) for `topic` and print the report.
#[instrument(name = "cmd_report", skip_all, fields(topic = %topic, file = ?file))]
pub fn cmd_report(
    topic: &str,
    file: Option<&Utf8Path>,
    global_json: bool,
    options: &AnalysisOptions,
) -> anyhow::Result<()> {
    debug!(
        other_words = options.other_words,
        extra_stop_words = options.stop_words.extra_len(),
        max_input_bytes = ?options.max_input_bytes,
        "executing report command"
    );

    let source = file.map_or_else(|| "standard input".to_string(), ToString::to_string);
    let input = open_input(file, options.max_input_bytes)?;
    let report = analyze_reader(input, topic, options)
        .with_context(|| format!("failed to analyze {source}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", TextReport(&report));
    }

    Ok(())
}

/// The fixed-width text report.
///
/// Rows are only printed for entries that exist: a topic that never occurs
/// gets no row, and fewer than the requested number of other words is fine.
pub struct TextReport<'a>(pub &'a TopicReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let header = format!(
            "{:<15} {:>8} {:>10} {:>15} {:>10}",
            "Word", "Count", "% Words", "Sentences", "% Sent"
        );

        writeln!(f, "{BANNER}")?;
        writeln!(
            f,
            "{}",
            "Topic index report".if_supports_color(Stream::Stdout, |t| t.bold())
        )?;
        writeln!(f, "Topic word: '{}'", report.topic)?;
        writeln!(f, "Total words: {}", report.total_words)?;
        writeln!(f, "Total sentences: {}", report.total_sentences)?;
        writeln!(f, "{BANNER}")?;
        writeln!(f, "{}", header.if_supports_color(Stream::Stdout, |t| t.bold()))?;
        writeln!(f, "{RULE}")?;

        if let Some(ref topic) = report.topic_entry {
            let row = render_row(topic, report.total_sentences);
            writeln!(f, "{}", row.if_supports_color(Stream::Stdout, |t| t.green()))?;
        }
        for other in &report.others {
            writeln!(f, "{}", render_row(other, report.total_sentences))?;
        }

        writeln!(f, "{BANNER}")
    }
}

fn render_row(stats: &WordStats, total_sentences: u64) -> String {
    format!(
        "{:<15} {:>8} {:>9.2}%   {:>5}/{:<7} {:>8.2}%",
        stats.word,
        stats.count,
        stats.pct_words,
        stats.sentence_count,
        total_sentences,
        stats.pct_sentences
    )
}
