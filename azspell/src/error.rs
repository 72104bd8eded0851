//! Startup and request errors.
use std::path::PathBuf;

use crate::config::{FREQ_DICT_VAR, USE_SYMSPELL_VAR};
use crate::speller::DictionaryError;

/// Errors that stop the correction engine from being built.
///
/// All of these are fatal: a process that gets one must not start serving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InitError {
    /// Correction was requested but this build has no correction engine
    #[error("SymSpell is not available in this build (rebuild with the `symspell` feature)")]
    MissingDependency,

    /// No usable dictionary path was configured
    #[error("Set {} to the path of the frequency dictionary: {reason}", FREQ_DICT_VAR)]
    Misconfiguration {
        /// what is wrong with the configured path
        reason: String,
    },

    /// The dictionary exists but could not be loaded
    #[error("Failed to load frequency dictionary '{}'", .path.display())]
    LoadFailure {
        /// dictionary that failed to load
        path: PathBuf,
        /// underlying loader error
        #[source]
        source: DictionaryError,
    },
}

/// Errors returned to callers of the correction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpellfixError {
    /// Correction is switched off, or the engine was never built
    #[error("SymSpell is disabled. Set {}=1", USE_SYMSPELL_VAR)]
    ServiceDisabled,
}
