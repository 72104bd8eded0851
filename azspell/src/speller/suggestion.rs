//! Suggestion for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Suggestion for a spelling correction
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// edit distance between the input and the word-form
    pub distance: u32,
    /// how often the word-form occurs in the dictionary
    pub count: u64,
}

impl Suggestion {
    /// creates a spelling correction suggestion
    pub fn new(value: SmolStr, distance: u32, count: u64) -> Suggestion {
        Suggestion {
            value,
            distance,
            count,
        }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the edit distance of the suggestion
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// gets the dictionary frequency of the suggestion
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best first: closest, then most frequent, then alphabetical.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.value.cmp(&other.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        let mut suggestions = vec![
            Suggestion::new("help".into(), 1, 10),
            Suggestion::new("hero".into(), 2, 1_000),
            Suggestion::new("hello".into(), 1, 1_000_000),
            Suggestion::new("helm".into(), 1, 10),
        ];
        suggestions.sort();

        let values = suggestions.iter().map(|s| s.value()).collect::<Vec<_>>();
        assert_eq!(values, vec!["hello", "helm", "help", "hero"]);
    }

    #[test]
    fn json() {
        let suggestion = Suggestion::new("şəhər".into(), 2, 30000);
        assert_eq!(
            serde_json::to_value(&suggestion).unwrap(),
            serde_json::json!({ "value": "şəhər", "distance": 2, "count": 30000 })
        );
    }
}
