//! Wordlist generation - personal seeds into a targeted candidate list
//!
//! Passes run strictly forward:
//! 1. seeds are normalized into base tokens (plus date-derived tokens)
//! 2. every token gains case and leetspeak variations
//! 3. permutations of 2..=3 tokens are joined plain and with `_`
//! 4. every candidate so far gets year and special-character suffixes
//! 5. the set is sorted and handed to a [`Sink`](crate::sink::Sink)

mod combine;
mod mutate;
mod seeds;
mod suffix;

use std::collections::HashSet;

pub use combine::{combine, expected_raw_count, permutation_count, permutations, JOIN_SEPARATOR};
pub use mutate::{capitalize, leet, transform, variations, LEET_MAP};
pub use seeds::{decompose_date, normalize, normalize_token, parse_dob, BaseTokenSet, NormalizedSeeds};
pub use suffix::{expand, SuffixRule};

use crate::error::{PassForgeError, Result};
use crate::sink::Sink;
use crate::types::{GenerationConfig, GenerationSummary, Seeds};

/// Deduplicated accumulator shared by the mutation passes
pub type CandidateSet = HashSet<String>;

/// Runs the full generation pipeline
#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    config: GenerationConfig,
}

impl WordlistGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the sorted candidate list for one set of seeds.
    ///
    /// Returns `EmptySeedSet` when nothing usable was supplied. Date problems
    /// are carried in [`Wordlist::warnings`] instead of failing the run.
    pub fn generate(&self, seeds: &Seeds) -> Result<Wordlist> {
        let normalized = normalize(seeds)?;
        let tokens = &normalized.tokens;

        let mut candidates = CandidateSet::new();
        transform(tokens, &mut candidates);
        let after_transform = candidates.len();

        let raw_combined = combine(tokens, self.config.max_combination_len, &mut candidates);
        let after_combination = candidates.len();

        let rule = SuffixRule::from_config(&self.config);
        expand(&mut candidates, &rule);
        let after_suffix = candidates.len();

        let summary = GenerationSummary {
            base_tokens: tokens.len(),
            after_transform,
            after_combination,
            after_suffix,
            current_year: self.config.current_year,
            warnings: normalized.warnings.iter().map(|w| w.to_string()).collect(),
        };

        tracing::info!(
            base_tokens = %summary.base_tokens,
            combined_raw = %raw_combined,
            total = %summary.after_suffix,
            "Wordlist generation completed"
        );

        Ok(Wordlist::finalize(normalized, candidates, summary))
    }
}

/// Finalized, sorted output of one generation run
#[derive(Debug, Clone)]
pub struct Wordlist {
    base_tokens: Vec<String>,
    warnings: Vec<PassForgeError>,
    candidates: Vec<String>,
    summary: GenerationSummary,
}

impl Wordlist {
    /// Impose lexicographic (codepoint) order on the final set
    fn finalize(normalized: NormalizedSeeds, candidates: CandidateSet, summary: GenerationSummary) -> Self {
        let mut candidates: Vec<String> = candidates.into_iter().collect();
        candidates.sort_unstable();

        Self {
            base_tokens: normalized.sorted_tokens(),
            warnings: normalized.warnings,
            candidates,
            summary,
        }
    }

    /// Base tokens, sorted
    pub fn base_tokens(&self) -> &[String] {
        &self.base_tokens
    }

    /// Non-fatal problems met while normalizing
    pub fn warnings(&self) -> &[PassForgeError] {
        &self.warnings
    }

    /// Candidates in ascending order, no duplicates
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn summary(&self) -> &GenerationSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.candidates
            .binary_search_by(|c| c.as_str().cmp(candidate))
            .is_ok()
    }

    /// Hand the sorted list to `sink` and return how many lines went out.
    ///
    /// The list stays intact on failure, so the write can simply be retried.
    pub fn write_to(&self, sink: &mut dyn Sink) -> Result<usize> {
        match sink.write(&self.candidates) {
            Ok(()) => {
                tracing::info!(target_name = %sink.target(), count = %self.len(), "Wordlist saved");
                Ok(self.len())
            }
            Err(e) => {
                tracing::warn!(target_name = %sink.target(), error = %e, "Wordlist write failed");
                Err(e)
            }
        }
    }
}
