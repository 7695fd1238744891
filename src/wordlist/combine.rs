//! Ordered combinations of base tokens
//!
//! Every permutation of length 2 up to the configured cap is joined twice,
//! once plain and once with `_`. The number of permutations of length `r`
//! drawn from `n` tokens is `n!/(n-r)!`, so the total grows factorially with
//! the seed count: 6 tokens give 30 + 120 = 150 permutations at the default
//! cap of 3, while 12 tokens already give 132 + 1320. Callers that accept
//! arbitrary seeds should bound `n` or lower the cap.

use super::CandidateSet;

/// Separator used for the joined form
pub const JOIN_SEPARATOR: &str = "_";

/// Number of ordered arrangements of `r` items drawn from `n`
pub fn permutation_count(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    ((n - r + 1)..=n).map(|k| k as u64).product()
}

/// Every ordered selection of `r` distinct items
pub fn permutations<'a>(items: &[&'a str], r: usize) -> Vec<Vec<&'a str>> {
    let mut out = Vec::new();
    if r == 0 || r > items.len() {
        return out;
    }

    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(r);
    permute(items, r, &mut used, &mut current, &mut out);
    out
}

fn permute<'a>(
    items: &[&'a str],
    r: usize,
    used: &mut [bool],
    current: &mut Vec<&'a str>,
    out: &mut Vec<Vec<&'a str>>,
) {
    if current.len() == r {
        out.push(current.clone());
        return;
    }

    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i]);
        permute(items, r, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// Lengths the combination pass builds for `n` tokens
pub fn lengths(n: usize, max_len: usize) -> std::ops::RangeInclusive<usize> {
    2..=max_len.min(n)
}

/// Raw candidates the pass emits before set deduplication
pub fn expected_raw_count(n: usize, max_len: usize) -> u64 {
    if n < 2 {
        return 0;
    }
    lengths(n, max_len).map(|r| permutation_count(n, r) * 2).sum()
}

/// Add plain and `_`-joined permutations of `tokens` to `candidates`.
///
/// Does nothing for fewer than two tokens. Returns the number of raw
/// candidates emitted, counting those that collapsed into existing entries.
pub fn combine<'a, I>(tokens: I, max_len: usize, candidates: &mut CandidateSet) -> u64
where
    I: IntoIterator<Item = &'a String>,
{
    let mut items: Vec<&str> = tokens.into_iter().map(String::as_str).collect();
    items.sort_unstable();

    let n = items.len();
    if n < 2 {
        return 0;
    }

    let mut emitted = 0;
    for r in lengths(n, max_len) {
        let perms = permutations(&items, r);
        tracing::debug!(length = %r, permutations = %perms.len(), "Combining base tokens");

        for perm in perms {
            candidates.insert(perm.concat());
            candidates.insert(perm.join(JOIN_SEPARATOR));
            emitted += 2;
        }
    }

    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_COMBINATION_LEN;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(2, 2), 2);
        assert_eq!(permutation_count(3, 3), 6);
        assert_eq!(permutation_count(6, 3), 120);
        assert_eq!(permutation_count(2, 3), 0);
    }

    #[test]
    fn test_permutations_are_ordered_and_distinct() {
        let perms = permutations(&["a", "b", "c"], 2);
        assert_eq!(
            perms,
            vec![
                vec!["a", "b"],
                vec!["a", "c"],
                vec!["b", "a"],
                vec!["b", "c"],
                vec!["c", "a"],
                vec!["c", "b"],
            ]
        );
    }

    #[test]
    fn test_single_token_contributes_nothing() {
        let mut candidates = CandidateSet::new();
        let emitted = combine(&owned(&["ann"]), MAX_COMBINATION_LEN, &mut candidates);
        assert_eq!(emitted, 0);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_two_tokens() {
        let mut candidates = CandidateSet::new();
        let emitted = combine(&owned(&["ann", "23"]), MAX_COMBINATION_LEN, &mut candidates);
        assert_eq!(emitted, 4);

        let mut got: Vec<_> = candidates.into_iter().collect();
        got.sort();
        assert_eq!(got, vec!["23_ann", "23ann", "ann23", "ann_23"]);
    }

    #[test]
    fn test_length_capped_at_three() {
        let tokens = owned(&["a", "b", "c", "d"]);
        let mut candidates = CandidateSet::new();
        let emitted = combine(&tokens, MAX_COMBINATION_LEN, &mut candidates);

        assert_eq!(emitted, expected_raw_count(4, MAX_COMBINATION_LEN));
        assert_eq!(emitted, (12 + 24) * 2);
        assert!(candidates.contains("a_b_c"));
        assert!(candidates.contains("dcb"));
        assert!(!candidates.iter().any(|c| c.len() == 4 && !c.contains('_')));
    }

    #[test]
    fn test_lower_cap() {
        let tokens = owned(&["a", "b", "c"]);
        let mut candidates = CandidateSet::new();
        let emitted = combine(&tokens, 2, &mut candidates);
        assert_eq!(emitted, 12);
        assert!(!candidates.contains("abc"));
    }

    #[test]
    fn test_collisions_collapse() {
        // "a"+"bc" and "ab"+"c" both concatenate to "abc"
        let tokens = owned(&["a", "bc", "ab", "c"]);
        let mut candidates = CandidateSet::new();
        let emitted = combine(&tokens, 2, &mut candidates);
        assert_eq!(emitted, 24);
        assert!(candidates.len() < 24);
    }
}
