//! Year and special-character suffixes

use super::CandidateSet;
use crate::types::GenerationConfig;

/// Suffixes appended to every candidate in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// `current_year - span ..= current_year`, as plain decimal strings
    pub years: Vec<String>,
    pub special_chars: Vec<char>,
}

impl SuffixRule {
    pub fn new(current_year: i32, year_span: u32, special_chars: Vec<char>) -> Self {
        let first = current_year.saturating_sub_unsigned(year_span);
        Self {
            years: (first..=current_year).map(|y| y.to_string()).collect(),
            special_chars,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.current_year,
            config.year_span,
            config.special_chars.clone(),
        )
    }

    /// Suffixes per candidate
    pub fn len(&self) -> usize {
        self.years.len() + self.special_chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every suffixed form of `word`, years first
    pub fn apply(&self, word: &str) -> Vec<String> {
        let years = self.years.iter().map(|y| format!("{}{}", word, y));
        let specials = self.special_chars.iter().map(|c| format!("{}{}", word, c));
        years.chain(specials).collect()
    }
}

/// Append every suffix to every candidate present when the pass starts.
///
/// The pass reads a copy taken up front, so freshly suffixed candidates are
/// never suffixed again. Returns the number of candidates actually added.
pub fn expand(candidates: &mut CandidateSet, rule: &SuffixRule) -> usize {
    let snapshot: Vec<String> = candidates.iter().cloned().collect();
    let before = candidates.len();

    for word in &snapshot {
        candidates.extend(rule.apply(word));
    }

    let added = candidates.len() - before;
    tracing::debug!(
        snapshot = %snapshot.len(),
        suffixes = %rule.len(),
        added = %added,
        "Suffix pass completed"
    );
    added
}
