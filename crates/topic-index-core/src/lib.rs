//! Core library for topic-index.
//!
//! Measures how much of a text is about a topic word: how often the topic
//! occurs, in how many sentences, and which other words dominate the text.
//!
//! # Modules
//!
//! - [`tokenizer`] - Streaming word and sentence scanner
//! - [`index`] - Per-word frequency index
//! - [`stop_words`] - Function words excluded from ranking
//! - [`select`] - Topic lookup and top-k selection
//! - [`report`] - Report assembly
//! - [`pipeline`] - The full single-pass analysis
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use topic_index_core::{AnalysisOptions, analyze_str};
//!
//! let report = analyze_str(
//!     "Cars are great. I love cars. Cars drive on roads.",
//!     "cars",
//!     &AnalysisOptions::default(),
//! )
//! .expect("in-memory input cannot fail to read");
//!
//! assert_eq!(report.total_sentences, 3);
//! assert_eq!(report.topic_entry.map(|t| t.count), Some(3));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod stop_words;
pub mod tokenizer;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use index::{FrequencyIndex, WordEntry};
pub use pipeline::{AnalysisOptions, analyze_reader, analyze_str};
pub use report::{TopicReport, WordStats};
pub use select::{DEFAULT_OTHER_WORDS, Selection, select};
pub use stop_words::{StopWords, is_stop_word};
pub use tokenizer::{Token, Tokenizer, Totals, normalize};
