//! Library interface for the `topic-index` CLI.
//!
//! This crate exposes the CLI's argument parser and command implementation as
//! a library, primarily for documentation generation and testing. The actual
//! entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man
//! pages and shell completions.

pub mod commands;

use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use camino::Utf8PathBuf;
use topic_index_core::LogLevel;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                   Log filter (e.g., debug, topic_index_core=trace)
    TOPIC_INDEX_LOG_PATH       Explicit log file path
    TOPIC_INDEX_LOG_DIR        Log directory
    TOPIC_INDEX_OTHER_WORDS    Number of other words to report
";

/// Command-line interface definition for topic-index.
#[derive(Parser)]
#[command(name = "topic-index")]
#[command(
    about = "Report how much of a text is about a topic word",
    long_about = "Report how much of a text is about a topic word.\n\n\
                  Counts the topic's occurrences and the sentences it appears in, \
                  then lists the most frequent other words (common function words excluded)."
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Topic word to measure
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub topic: String,

    /// File to analyze (reads standard input when omitted)
    pub file: Option<Utf8PathBuf>,

    /// Number of other words to report
    #[arg(long, value_name = "N")]
    pub others: Option<usize>,

    /// Extra word to exclude from the other-word ranking (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    pub stop_words: Vec<String>,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log level when neither RUST_LOG nor -q/-v is given
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long)]
    pub json: bool,
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn parses_topic_and_file() {
        let cli = Cli::try_parse_from(["topic-index", "cars", "notes.txt"]).unwrap();
        assert_eq!(cli.topic, "cars");
        assert_eq!(cli.file.as_ref().map(|f| f.as_str()), Some("notes.txt"));
    }

    #[test]
    fn file_is_optional() {
        let cli = Cli::try_parse_from(["topic-index", "cars"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn rejects_empty_topic() {
        assert!(Cli::try_parse_from(["topic-index", ""]).is_err());
    }

    #[test]
    fn requires_topic() {
        assert!(Cli::try_parse_from(["topic-index", "--json"]).is_err());
    }

    #[test]
    fn usage_marks_topic_required() {
        let usage = command().render_usage().to_string();
        assert!(usage.contains("<TOPIC> [FILE]"), "usage was: {usage}");
    }

    #[test]
    fn collects_repeated_stop_words() {
        let cli = Cli::try_parse_from([
            "topic-index",
            "--stop-word",
            "also",
            "--stop-word",
            "really",
            "cars",
        ])
        .unwrap();
        assert_eq!(cli.stop_words, ["also", "really"]);
    }
}
