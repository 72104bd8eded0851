//! [`Speller`] backed by the Symmetric Delete algorithm of the `symspell` crate.
use std::path::Path;
use std::sync::Arc;

use ::symspell::{SymSpell, SymSpellBuilder, UnicodeStringStrategy};
use hashbrown::HashSet;
use smol_str::SmolStr;

use super::suggestion::Suggestion;
use super::{parse_dictionary_line, DictionaryError, Speller, SpellerConfig, Verbosity};

/// An in-memory frequency dictionary with its delete index.
pub struct SymSpellSpeller {
    symspell: SymSpell<UnicodeStringStrategy>,
    term_count: usize,
}

impl std::fmt::Debug for SymSpellSpeller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymSpellSpeller")
            .field("term_count", &self.term_count)
            .finish_non_exhaustive()
    }
}

impl SymSpellSpeller {
    /// Reads a `term count` dictionary file and indexes it.
    pub fn open(path: &Path, config: &SpellerConfig) -> Result<Arc<SymSpellSpeller>, DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(DictionaryError::Io)?;
        SymSpellSpeller::from_dictionary(&content, config)
    }

    /// Indexes dictionary text already in memory.
    ///
    /// Blank lines are ignored; lines without a term and a non-negative
    /// integer count are skipped and logged. Fails when nothing is left.
    pub fn from_dictionary(
        content: &str,
        config: &SpellerConfig,
    ) -> Result<Arc<SymSpellSpeller>, DictionaryError> {
        let mut symspell: SymSpell<UnicodeStringStrategy> = SymSpellBuilder::default()
            .max_dictionary_edit_distance(i64::from(config.max_dictionary_edit_distance))
            .prefix_length(i64::from(config.prefix_length))
            .count_threshold(i64::try_from(config.count_threshold).unwrap_or(i64::MAX))
            .build()
            .map_err(|e| DictionaryError::Engine(e.to_string()))?;

        let mut terms = HashSet::new();
        let mut skipped = 0usize;

        for (n, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_dictionary_line(line, config) {
                Some((term, count)) => {
                    // Re-serialized so the engine only ever sees its own column layout.
                    symspell.load_dictionary_line(&format!("{} {}", term, count), 0, 1, " ");
                    terms.insert(term);
                }
                None => {
                    log::debug!("skipping malformed dictionary line {}: {:?}", n + 1, line);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("{} malformed dictionary lines skipped", skipped);
        }

        if terms.is_empty() {
            return Err(DictionaryError::Empty { skipped });
        }

        Ok(Arc::new(SymSpellSpeller {
            symspell,
            term_count: terms.len(),
        }))
    }
}

impl Speller for SymSpellSpeller {
    #[inline]
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        if word.is_empty() {
            return vec![];
        }

        let verbosity = match config.verbosity {
            Verbosity::Top => ::symspell::Verbosity::Top,
            Verbosity::Closest => ::symspell::Verbosity::Closest,
            Verbosity::All => ::symspell::Verbosity::All,
        };
        let max_edit_distance = config
            .max_edit_distance
            .min(config.max_dictionary_edit_distance);

        let mut suggestions = self
            .symspell
            .lookup(word, verbosity, i64::from(max_edit_distance))
            .into_iter()
            .map(|s| {
                Suggestion::new(
                    SmolStr::from(s.term),
                    u32::try_from(s.distance).unwrap_or(u32::MAX),
                    u64::try_from(s.count).unwrap_or(0),
                )
            })
            .collect::<Vec<_>>();

        suggestions.sort();

        if let Some(n) = config.n_best {
            suggestions.truncate(n);
        }

        suggestions
    }

    fn term_count(&self) -> usize {
        self.term_count
    }
}
