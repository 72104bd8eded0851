//! Building the correction engine once at startup.
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::InitError;
use crate::speller::suggestion::Suggestion;
use crate::speller::{Speller, SpellerConfig};

/// A loaded speller plus the lookup settings used for every word.
///
/// Cloning is cheap and shares the same dictionary.
#[derive(Clone)]
pub struct Engine {
    speller: Arc<dyn Speller + Send + Sync>,
    config: SpellerConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("term_count", &self.speller.term_count())
            .field("config", &self.config)
            .finish()
    }
}

impl Engine {
    /// Wraps an already loaded speller.
    pub fn new(speller: Arc<dyn Speller + Send + Sync>, config: SpellerConfig) -> Engine {
        Engine { speller, config }
    }

    /// Builds the engine described by `config`.
    ///
    /// Returns `Ok(None)` when correction is disabled. Any error means the
    /// process was asked for correction and cannot provide it.
    pub fn init(config: &Config) -> Result<Option<Engine>, InitError> {
        if !config.enabled {
            log::info!("spelling correction disabled");
            return Ok(None);
        }

        if !cfg!(feature = "symspell") {
            return Err(InitError::MissingDependency);
        }

        let path = match config.freq_dict.as_deref() {
            None => {
                return Err(InitError::Misconfiguration {
                    reason: "variable is not set".into(),
                })
            }
            Some(path) if !path.is_file() => {
                return Err(InitError::Misconfiguration {
                    reason: format!("'{}' is not an existing file", path.display()),
                })
            }
            Some(path) => path,
        };

        let engine = Engine::load(path, SpellerConfig::default())?;
        log::info!(
            "loaded {} terms from '{}'",
            engine.speller.term_count(),
            path.display()
        );

        Ok(Some(engine))
    }

    #[cfg(feature = "symspell")]
    fn load(path: &Path, config: SpellerConfig) -> Result<Engine, InitError> {
        use crate::speller::symspell::SymSpellSpeller;

        let speller = SymSpellSpeller::open(path, &config).map_err(|source| InitError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Engine::new(speller, config))
    }

    #[cfg(not(feature = "symspell"))]
    fn load(_path: &Path, _config: SpellerConfig) -> Result<Engine, InitError> {
        Err(InitError::MissingDependency)
    }

    /// Suggestions for `word`, best first.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.speller.clone().suggest_with_config(word, &self.config)
    }

    /// The underlying speller.
    pub fn speller(&self) -> &Arc<dyn Speller + Send + Sync> {
        &self.speller
    }

    /// Lookup settings used by [`Engine::suggest`].
    pub fn config(&self) -> &SpellerConfig {
        &self.config
    }
}


#[cfg(all(test, not(feature = "symspell")))]
mod tests_without_symspell {
    use super::*;

    #[test]
    fn missing_dependency_before_path_check() {
        let config = Config {
            enabled: true,
            freq_dict: None,
        };
        let err = Engine::init(&config).unwrap_err();
        assert!(matches!(err, InitError::MissingDependency));
    }

    #[test]
    fn disabled_is_none() {
        assert!(Engine::init(&Config::default()).unwrap().is_none());
    }
}
