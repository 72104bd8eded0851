//! The correction engine seam: anything that can rank dictionary terms
//! close to a word.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::speller::suggestion::Suggestion;

pub mod suggestion;
#[cfg(feature = "symspell")]
pub mod symspell;

/// Which suggestions a lookup returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// the single best suggestion
    Top,
    /// all suggestions sharing the smallest edit distance
    Closest,
    /// every suggestion within the maximum edit distance
    All,
}

/// Settings for building a dictionary and looking words up in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellerConfig {
    /// largest edit distance precomputed for the dictionary
    pub max_dictionary_edit_distance: u32,
    /// length of the word prefix used for the delete index
    pub prefix_length: u32,
    /// minimum count for a term to be suggested
    pub count_threshold: u64,
    /// dictionary column holding the term
    pub term_index: usize,
    /// dictionary column holding the count
    pub count_index: usize,
    /// largest edit distance for lookups, at most `max_dictionary_edit_distance`
    pub max_edit_distance: u32,
    /// which suggestions a lookup returns
    pub verbosity: Verbosity,
    /// maximum number of suggestions returned
    pub n_best: Option<usize>,
}

impl SpellerConfig {
    /// Distance 2, prefix length 7, `term count` columns, closest matches.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            max_dictionary_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
            term_index: 0,
            count_index: 1,
            max_edit_distance: 2,
            verbosity: Verbosity::Closest,
            n_best: None,
        }
    }
}

/// Errors from loading a frequency dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// The dictionary file could not be read
    #[error("Failed to read dictionary")]
    Io(#[source] std::io::Error),

    /// The engine rejected its construction parameters
    #[error("Invalid engine parameters: {0}")]
    Engine(String),

    /// No line of the dictionary held a term and a count
    #[error("No dictionary entries found ({skipped} malformed lines skipped)")]
    Empty {
        /// number of lines that could not be parsed
        skipped: usize,
    },
}

/// A source of ranked spelling suggestions.
pub trait Speller {
    /// Suggestions for `word` with the default [`SpellerConfig`].
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion>;
    /// Suggestions for `word`, best first.
    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;
    /// Number of distinct terms the speller knows.
    fn term_count(&self) -> usize;
}

/// Splits one dictionary line into its term and count.
///
/// Lines are whitespace separated; the columns are picked with
/// `term_index` and `count_index`.
pub fn parse_dictionary_line<'a>(line: &'a str, config: &SpellerConfig) -> Option<(&'a str, i64)> {
    let columns = line.split_whitespace().collect::<Vec<_>>();
    let term = *columns.get(config.term_index)?;
    let count = columns.get(config.count_index)?.parse::<i64>().ok()?;

    if count < 0 {
        return None;
    }

    Some((term, count))
}
