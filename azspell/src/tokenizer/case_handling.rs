//! Detecting the capitalization of a word and carrying it over to another.
use smol_str::SmolStr;

/// Lowercases every character.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Uppercases every character.
#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Uppercases the first character and lowercases the rest.
#[inline(always)]
pub fn capitalize(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + lower_case(c.as_str()).as_str()),
    }
}

/// At least one cased letter, and none of them lowercase.
pub fn is_all_caps(word: &str) -> bool {
    let mut has_upper = false;

    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        has_upper |= ch.is_uppercase();
    }

    has_upper
}

/// First character is uppercase, whatever follows.
pub fn is_first_caps(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

/// Whether the word contains any alphabetic character.
pub fn has_letter(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

/// Capitalization shape of a word, carried over onto its correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    /// Every cased letter is uppercase.
    AllCaps,
    /// Only the first character is known to be uppercase.
    FirstCaps,
    /// Left as the dictionary spells it.
    None,
}

impl CaseMutation {
    /// Classifies `word`, all caps taking precedence over first caps.
    pub fn of(word: &str) -> CaseMutation {
        if is_all_caps(word) {
            CaseMutation::AllCaps
        } else if is_first_caps(word) {
            CaseMutation::FirstCaps
        } else {
            CaseMutation::None
        }
    }

    /// Recases `term` to this shape.
    pub fn apply(self, term: &str) -> SmolStr {
        match self {
            CaseMutation::AllCaps => upper_case(term),
            CaseMutation::FirstCaps => capitalize(term),
            CaseMutation::None => SmolStr::new(term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations() {
        assert_eq!(CaseMutation::of("IDENTITETE"), CaseMutation::AllCaps);
        assert_eq!(CaseMutation::of("Identitete"), CaseMutation::FirstCaps);
        assert_eq!(CaseMutation::of("identitete"), CaseMutation::None);

        assert_eq!(CaseMutation::of("A"), CaseMutation::AllCaps);
        assert_eq!(CaseMutation::of("HELO2"), CaseMutation::AllCaps);
        assert_eq!(CaseMutation::of("McDonald"), CaseMutation::FirstCaps);
        assert_eq!(CaseMutation::of("mcDonald"), CaseMutation::None);
        assert_eq!(CaseMutation::of("İSTİ"), CaseMutation::AllCaps);
        assert_eq!(CaseMutation::of("Şəhər"), CaseMutation::FirstCaps);

        assert_eq!(CaseMutation::of("2024"), CaseMutation::None);
        assert_eq!(CaseMutation::of("_Abc"), CaseMutation::None);
    }

    #[test]
    fn apply() {
        assert_eq!(CaseMutation::AllCaps.apply("hello").as_str(), "HELLO");
        assert_eq!(CaseMutation::FirstCaps.apply("hello").as_str(), "Hello");
        assert_eq!(CaseMutation::FirstCaps.apply("mcdonald").as_str(), "Mcdonald");
        assert_eq!(CaseMutation::FirstCaps.apply("eLSE").as_str(), "Else");
        assert_eq!(CaseMutation::None.apply("hello").as_str(), "hello");
        assert_eq!(CaseMutation::FirstCaps.apply("").as_str(), "");
        assert_eq!(CaseMutation::AllCaps.apply("şəhər").as_str(), "ŞƏHƏR");
    }

    #[test]
    fn shape_is_preserved() {
        let words = ["HELO", "Helo", "helo", "X", "Wörld", "wÖRLD"];
        let terms = ["hello", "world", "x", "ƏLA", "düz"];

        for word in words.iter() {
            let mutation = CaseMutation::of(word);
            for term in terms.iter() {
                let recased = mutation.apply(term);
                match mutation {
                    CaseMutation::AllCaps => assert!(is_all_caps(&recased), "{} {}", word, term),
                    CaseMutation::FirstCaps => {
                        assert!(is_first_caps(&recased), "{} {}", word, term)
                    }
                    CaseMutation::None => assert_eq!(recased.as_str(), *term),
                }
            }
        }
    }

    #[test]
    fn letters() {
        assert!(has_letter("abc123"));
        assert!(has_letter("ə"));
        assert!(!has_letter("2024"));
        assert!(!has_letter("___"));
    }
}
