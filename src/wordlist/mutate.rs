//! Case and leetspeak variations of base tokens

use super::CandidateSet;

/// Letter to digit substitutions; unlisted characters pass through
pub const LEET_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

fn leet_char(c: char) -> char {
    LEET_MAP
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Substitute every mapped character
pub fn leet(word: &str) -> String {
    word.chars().map(leet_char).collect()
}

/// Upper-case the first character and lower-case the rest.
///
/// `"mcdonald"` becomes `"Mcdonald"`, and so does `"mcDonald"`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Variations of a single token: itself, capitalized, and the leet forms
/// when substitution changed anything
pub fn variations(word: &str) -> Vec<String> {
    let mut out = vec![word.to_string(), capitalize(word)];

    let leeted = leet(word);
    if leeted != word {
        out.push(capitalize(&leeted));
        out.push(leeted);
    }

    out
}

/// Add the variations of every token to `candidates`
pub fn transform<'a, I>(tokens: I, candidates: &mut CandidateSet)
where
    I: IntoIterator<Item = &'a String>,
{
    for token in tokens {
        candidates.extend(variations(token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leet() {
        assert_eq!(leet("ann"), "4nn");
        assert_eq!(leet("toast"), "70457");
        assert_eq!(leet("bub"), "bub");
        assert_eq!(leet("1990"), "1990");
    }

    #[test]
    fn test_leet_is_deterministic() {
        assert_eq!(leet("seattle"), leet("seattle"));
        // Not idempotent in general, but digits are never remapped
        assert_eq!(leet(&leet("seattle")), leet("seattle"));
    }

    #[test]
    fn test_capitalize_lowers_rest() {
        assert_eq!(capitalize("mcdonald"), "Mcdonald");
        assert_eq!(capitalize("mcDonald"), "Mcdonald");
        assert_eq!(capitalize("4nn"), "4nn");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_variations_with_leet() {
        let vars = variations("ann");
        assert_eq!(vars, vec!["ann", "Ann", "4nn", "4nn"]);
    }

    #[test]
    fn test_variations_without_leet() {
        let vars = variations("bub");
        assert_eq!(vars, vec!["bub", "Bub"]);
    }

    #[test]
    fn test_transform_only_adds() {
        let tokens = vec!["rex".to_string(), "ann".to_string()];
        let mut candidates = CandidateSet::new();
        candidates.insert("existing".to_string());

        transform(&tokens, &mut candidates);

        for expected in ["existing", "rex", "Rex", "r3x", "R3x", "ann", "Ann", "4nn"] {
            assert!(candidates.contains(expected), "missing {}", expected);
        }
        assert_eq!(candidates.len(), 8);
    }
}
