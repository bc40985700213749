//! Streaming word tokenizer with sentence tracking.
//!
//! Scans a byte stream once, front to back. A word is a maximal run of ASCII
//! alphanumeric bytes; every other byte is a separator. `.`, `!` and `?` also
//! close the current sentence. Non-ASCII bytes are plain separators.
//!
//! Abbreviations such as "Dr." end a sentence like any other period. Smarter
//! boundary detection would change the reported statistics.

use std::io::{self, BufRead};
use std::mem;

use serde::{Deserialize, Serialize};

/// Reduce a word to lower-case ASCII alphanumerics.
///
/// This is the same reduction applied to every token, so a topic argument
/// such as `"Cars!"` compares equal to the token `cars`.
pub fn normalize(word: &str) -> String {
    word.bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect()
}

const fn is_sentence_terminator(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

/// A normalized word and the sentence it appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The normalized word.
    pub word: String,
    /// Id of the sentence containing the word.
    pub sentence: u64,
}

/// Word and sentence totals for a finished stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of words in the stream.
    pub words: u64,
    /// Number of sentences in the stream.
    pub sentences: u64,
}

/// Scanner state for a single pass.
#[derive(Debug, Default)]
struct StreamState {
    word: String,
    sentence: u64,
    total_words: u64,
    total_sentences: u64,
}

impl StreamState {
    fn feed(&mut self, byte: u8) -> Option<Token> {
        if byte.is_ascii_alphanumeric() {
            self.word.push(char::from(byte.to_ascii_lowercase()));
            return None;
        }

        let token = self.take_word();
        if is_sentence_terminator(byte) {
            self.total_sentences += 1;
            self.sentence = self.total_sentences;
        }
        token
    }

    fn take_word(&mut self) -> Option<Token> {
        if self.word.is_empty() {
            return None;
        }
        self.total_words += 1;
        Some(Token {
            word: mem::take(&mut self.word),
            sentence: self.sentence,
        })
    }
}

/// Lazily yields [`Token`]s from a byte stream.
///
/// The iterator is single-pass: once the reader is exhausted (or fails) it
/// keeps returning `None`. Call [`Tokenizer::totals`] afterwards for the
/// final word and sentence counts.
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    state: StreamState,
    bytes_read: u64,
    done: bool,
}

impl<R: BufRead> Tokenizer<R> {
    /// Create a tokenizer over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: StreamState::default(),
            bytes_read: 0,
            done: false,
        }
    }

    /// Read until the next complete word or the end of the stream.
    fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if chunk.is_empty() {
                // A word without a trailing separator still counts.
                return Ok(self.state.take_word());
            }

            let mut consumed = 0;
            let mut token = None;
            for &byte in chunk {
                consumed += 1;
                token = self.state.feed(byte);
                if token.is_some() {
                    break;
                }
            }
            self.reader.consume(consumed);
            self.bytes_read += consumed as u64;

            if token.is_some() {
                return Ok(token);
            }
        }
    }
}

impl<R> Tokenizer<R> {
    /// Totals for everything consumed so far.
    ///
    /// A stream with words but no terminator is reported as one sentence.
    pub const fn totals(&self) -> Totals {
        let words = self.state.total_words;
        let mut sentences = self.state.total_sentences;
        if sentences == 0 && words > 0 {
            sentences = 1;
        }
        Totals { words, sentences }
    }

    /// Number of bytes consumed from the reader.
    pub const fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Tokenizer<R> {}
