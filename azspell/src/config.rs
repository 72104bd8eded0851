//! Process configuration, read once from the environment at startup.
use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Enables the spelling correction endpoint when set to exactly `1`.
pub const USE_SYMSPELL_VAR: &str = "AZGRAMMA_USE_SYMSPELL";

/// Path to the two-column `term count` frequency dictionary.
pub const FREQ_DICT_VAR: &str = "AZGRAMMA_FREQ_DICT";

/// Settings that decide whether and how the correction engine is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// whether spelling correction was requested
    pub enabled: bool,
    /// location of the frequency dictionary, if any was given
    pub freq_dict: Option<PathBuf>,
}

impl Config {
    /// Reads [`USE_SYMSPELL_VAR`] and [`FREQ_DICT_VAR`] from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let enabled = lookup(USE_SYMSPELL_VAR).map_or(false, |v| v.to_str() == Some("1"));

        // An empty path counts as unset.
        let freq_dict = lookup(FREQ_DICT_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Config { enabled, freq_dict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn disabled_by_default() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn enabled_only_by_exact_one() {
        assert!(config_from(&[(USE_SYMSPELL_VAR, "1")]).enabled);

        for value in ["0", "true", "yes", " 1", "1 ", "01", ""] {
            assert!(
                !config_from(&[(USE_SYMSPELL_VAR, value)]).enabled,
                "{:?} should not enable the engine",
                value
            );
        }
    }

    #[test]
    fn dictionary_path() {
        let config = config_from(&[(USE_SYMSPELL_VAR, "1"), (FREQ_DICT_VAR, "/srv/az.txt")]);
        assert_eq!(config.freq_dict, Some(PathBuf::from("/srv/az.txt")));

        let config = config_from(&[(FREQ_DICT_VAR, "")]);
        assert_eq!(config.freq_dict, None);
    }
}
