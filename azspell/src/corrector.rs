//! Correcting words and whole texts while keeping their casing.
use std::borrow::Cow;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::SpellfixError;
use crate::tokenizer::case_handling::{has_letter, lower_case, CaseMutation};
use crate::tokenizer::Tokenize;

/// Replaces `word` with the engine's best suggestion, cased like `word`.
///
/// The word comes back unchanged when there is no engine, when it has no
/// letters (numbers, underscores) or when nothing in the dictionary is close
/// enough.
pub fn correct_word<'a>(engine: Option<&Engine>, word: &'a str) -> Cow<'a, str> {
    let engine = match engine {
        Some(v) => v,
        None => return Cow::Borrowed(word),
    };

    if !has_letter(word) {
        return Cow::Borrowed(word);
    }

    let suggestions = engine.suggest(&lower_case(word));
    let best = match suggestions.first() {
        Some(v) => v,
        None => return Cow::Borrowed(word),
    };

    let corrected = CaseMutation::of(word).apply(best.value());
    if corrected.as_str() == word {
        Cow::Borrowed(word)
    } else {
        log::trace!("{:?} -> {:?}", word, corrected);
        Cow::Owned(corrected.to_string())
    }
}

/// Corrects every word of `text`, leaving spacing and punctuation as they are.
pub fn correct_text(engine: Option<&Engine>, text: &str) -> String {
    text.segments()
        .map(|segment| {
            if segment.is_word() {
                correct_word(engine, segment.value)
            } else {
                Cow::Borrowed(segment.value)
            }
        })
        .collect()
}

/// Corrects `text`, refusing when correction is switched off.
pub fn spellfix(config: &Config, engine: Option<&Engine>, text: &str) -> Result<String, SpellfixError> {
    match engine {
        Some(engine) if config.enabled => Ok(correct_text(Some(engine), text)),
        _ => Err(SpellfixError::ServiceDisabled),
    }
}
