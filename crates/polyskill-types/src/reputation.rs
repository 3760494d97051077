//! Engine-vote tally returned by the URL reputation scanner.
//!
//! Each scanning engine reports one verdict string ("clean", "malicious",
//! "unrated", ...). The tally counts engines per verdict and preserves the
//! order in which verdicts were first seen, so the rendered report is
//! stable within one scan.

use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from verdict string to engine count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationTally {
    entries: Vec<(String, u32)>,
}

impl ReputationTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one engine vote for `verdict`.
    pub fn record(&mut self, verdict: &str) {
        match self.entries.iter_mut().find(|(v, _)| v == verdict) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((verdict.to_string(), 1)),
        }
    }

    pub fn get(&self, verdict: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(v, _)| v == verdict)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, verdict: &str) -> bool {
        self.get(verdict).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verdict/count pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(v, c)| (v.as_str(), *c))
    }
}

impl FromIterator<(String, u32)> for ReputationTally {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_repeats() {
        let mut tally = ReputationTally::new();
        tally.record("clean");
        tally.record("clean");
        tally.record("unrated");
        assert_eq!(tally.get("clean"), Some(2));
        assert_eq!(tally.get("unrated"), Some(1));
        assert_eq!(tally.get("malicious"), None);
    }

    #[test]
    fn test_iteration_preserves_first_seen_order() {
        let mut tally = ReputationTally::new();
        tally.record("unrated");
        tally.record("clean");
        tally.record("unrated");
        let order: Vec<&str> = tally.iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["unrated", "clean"]);
    }

    #[test]
    fn test_from_iter() {
        let tally: ReputationTally =
            [("clean".to_string(), 60), ("unrated".to_string(), 2)].into_iter().collect();
        assert_eq!(tally.get("clean"), Some(60));
        assert!(!tally.is_empty());
    }
}
