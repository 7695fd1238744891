//! Seed normalization: raw personal details into base tokens

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{PassForgeError, Result};
use crate::types::{SeedField, Seeds};

/// Strict `YYYY-MM-DD` shape; the calendar check happens afterwards
const DATE_PATTERN: &str = r"^(\d{4})-(\d{2})-(\d{2})$";

/// Unique, lower-cased, non-empty tokens the rest of the pipeline expands
pub type BaseTokenSet = HashSet<String>;

/// Output of the normalizer
#[derive(Debug, Clone, Default)]
pub struct NormalizedSeeds {
    pub tokens: BaseTokenSet,
    /// Non-fatal problems, currently only `InvalidDateFormat`
    pub warnings: Vec<PassForgeError>,
}

impl NormalizedSeeds {
    /// Tokens in display order
    pub fn sorted_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.tokens.iter().cloned().collect();
        tokens.sort();
        tokens
    }
}

/// Trim and lower-case a free-text value, dropping it if nothing is left
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Parse a date of birth in strict `YYYY-MM-DD` form
pub fn parse_dob(raw: &str) -> Result<NaiveDate> {
    let pattern = Regex::new(DATE_PATTERN).map_err(|e| PassForgeError::internal(e.to_string()))?;

    let caps = pattern
        .captures(raw)
        .ok_or_else(|| PassForgeError::invalid_date(raw))?;

    let field = |i: usize| -> Result<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| PassForgeError::invalid_date(raw))
    };

    let year = i32::try_from(field(1)?).map_err(|_| PassForgeError::invalid_date(raw))?;
    NaiveDate::from_ymd_opt(year, field(2)?, field(3)?).ok_or_else(|| PassForgeError::invalid_date(raw))
}

/// The five date-derived tokens: year, day, month, day+month, month+day
pub fn decompose_date(date: NaiveDate) -> [String; 5] {
    let day = format!("{:02}", date.day());
    let month = format!("{:02}", date.month());
    [
        date.year().to_string(),
        format!("{}{}", day, month),
        format!("{}{}", month, day),
        day,
        month,
    ]
}

/// Build the base token set from raw seeds.
///
/// An unparsable date is recorded in `warnings` and contributes nothing.
/// Returns `EmptySeedSet` when no field yields a token.
pub fn normalize(seeds: &Seeds) -> Result<NormalizedSeeds> {
    let mut normalized = NormalizedSeeds::default();

    for field in SeedField::ALL {
        let Some(raw) = seeds.get(field) else {
            continue;
        };

        if field.is_free_text() {
            if let Some(token) = normalize_token(raw) {
                normalized.tokens.insert(token);
            }
            continue;
        }

        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        match parse_dob(raw) {
            Ok(date) => normalized.tokens.extend(decompose_date(date)),
            Err(e @ PassForgeError::InvalidDateFormat { .. }) => {
                tracing::warn!(field = %field, input = %raw, "Invalid date format, skipping date-based words");
                normalized.warnings.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    if normalized.tokens.is_empty() {
        return Err(PassForgeError::EmptySeedSet);
    }

    tracing::debug!(base_tokens = %normalized.tokens.len(), "Seeds normalized");
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Ann "), Some("ann".to_string()));
        assert_eq!(normalize_token("   "), None);
        assert_eq!(normalize_token(""), None);
    }

    #[test]
    fn test_date_decomposition() {
        let date = parse_dob("1990-05-21").unwrap();
        let tokens: HashSet<String> = decompose_date(date).into_iter().collect();
        let expected: HashSet<String> = ["1990", "21", "05", "2105", "0521"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_invalid_dates() {
        for raw in ["1990-13-40", "1990-02-30", "1990-5-21", "21/05/1990", "1990-05-21x"] {
            assert_eq!(
                parse_dob(raw).unwrap_err(),
                PassForgeError::invalid_date(raw),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_invalid_date_is_non_fatal() {
        let seeds = Seeds::new()
            .with(SeedField::Name, "Ann")
            .with(SeedField::Dob, "1990-13-40");
        let normalized = normalize(&seeds).unwrap();
        assert_eq!(normalized.sorted_tokens(), vec!["ann"]);
        assert_eq!(normalized.warnings, vec![PassForgeError::invalid_date("1990-13-40")]);
    }

    #[test]
    fn test_duplicates_collapse_case_folded() {
        let seeds = Seeds::new()
            .with(SeedField::Name, "Rex")
            .with(SeedField::Pet, " rex ")
            .with(SeedField::City, "REX");
        let normalized = normalize(&seeds).unwrap();
        assert_eq!(normalized.tokens.len(), 1);
        assert!(normalized.tokens.contains("rex"));
    }

    #[test]
    fn test_blank_dob_is_absent() {
        let seeds = Seeds::new()
            .with(SeedField::Name, "ann")
            .with(SeedField::Dob, "  ");
        let normalized = normalize(&seeds).unwrap();
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_empty_seed_set() {
        let seeds = Seeds::new()
            .with(SeedField::Name, "   ")
            .with(SeedField::Dob, "");
        assert_eq!(normalize(&seeds).unwrap_err(), PassForgeError::EmptySeedSet);
    }

    #[test]
    fn test_only_invalid_date_is_empty() {
        let seeds = Seeds::new().with(SeedField::Dob, "not-a-date");
        assert_eq!(normalize(&seeds).unwrap_err(), PassForgeError::EmptySeedSet);
    }
}
