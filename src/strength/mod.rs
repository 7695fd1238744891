//! Password strength analysis
//!
//! Scoring is delegated to a [`StrengthOracle`]; [`ZxcvbnOracle`] is the
//! production implementation.

mod zxcvbn_oracle;

pub use zxcvbn_oracle::ZxcvbnOracle;

use serde::{Deserialize, Serialize};

use crate::error::{PassForgeError, Result};

/// Highest score an oracle may report
pub const MAX_SCORE: u8 = 4;

/// Strength estimate for one password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// 0 (weakest) to 4 (strongest)
    pub score: u8,
    /// Crack time under an offline fast-hash attack, human readable
    pub crack_time_display: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        match self.score {
            0 => "very weak",
            1 => "weak",
            2 => "fair",
            3 => "strong",
            _ => "very strong",
        }
    }

    /// Render the report shown to the user, with the password masked
    pub fn report(&self, password: &str) -> String {
        let mut out = String::new();
        out.push_str("--- Password Strength Analysis ---\n");
        out.push_str(&format!("Password: {}\n", "*".repeat(password.chars().count())));
        out.push_str(&format!(
            "Estimated time to crack (offline, fast hash): {}\n",
            self.crack_time_display
        ));
        out.push_str(&format!("Strength Score: {}/{} ({})\n", self.score, MAX_SCORE, self.label()));

        if let Some(warning) = &self.warning {
            out.push_str(&format!("Warning: {}\n", warning));
        }

        if !self.suggestions.is_empty() {
            out.push_str("Suggestions for improvement:\n");
            for suggestion in &self.suggestions {
                out.push_str(&format!("- {}\n", suggestion));
            }
        }
        out.push_str("--------------------------------");
        out
    }
}

/// Anything that can estimate password strength
pub trait StrengthOracle {
    /// Score a non-empty password
    fn score(&self, password: &str) -> StrengthResult;

    fn name(&self) -> &'static str;
}

/// Score `password`, rejecting empty input before the oracle sees it
pub fn analyze(oracle: &dyn StrengthOracle, password: &str) -> Result<StrengthResult> {
    if password.is_empty() {
        return Err(PassForgeError::EmptyPassword);
    }

    let mut result = oracle.score(password);
    result.score = result.score.min(MAX_SCORE);
    tracing::debug!(oracle = %oracle.name(), score = %result.score, "Password analyzed");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StubOracle {
        score: u8,
        calls: Cell<usize>,
    }

    impl StubOracle {
        fn new(score: u8) -> Self {
            Self {
                score,
                calls: Cell::new(0),
            }
        }
    }

    impl StrengthOracle for StubOracle {
        fn score(&self, _password: &str) -> StrengthResult {
            self.calls.set(self.calls.get() + 1);
            StrengthResult {
                score: self.score,
                crack_time_display: "3 hours".to_string(),
                warning: Some("This is similar to a commonly used password.".to_string()),
                suggestions: vec!["Add another word or two.".to_string()],
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[test]
    fn test_empty_password_never_reaches_oracle() {
        let oracle = StubOracle::new(2);
        assert_eq!(analyze(&oracle, "").unwrap_err(), PassForgeError::EmptyPassword);
        assert_eq!(oracle.calls.get(), 0);
    }

    #[test]
    fn test_analyze_passes_through() {
        let oracle = StubOracle::new(1);
        let result = analyze(&oracle, "hunter2").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.label(), "weak");
        assert_eq!(oracle.calls.get(), 1);
    }

    #[test]
    fn test_score_clamped() {
        let oracle = StubOracle::new(9);
        assert_eq!(analyze(&oracle, "x").unwrap().score, MAX_SCORE);
    }

    #[test]
    fn test_report_masks_password() {
        let result = StubOracle::new(2).score("hunter2");
        let report = result.report("hunter2");
        assert!(report.contains("Password: *******"));
        assert!(!report.contains("hunter2"));
        assert!(report.contains("Strength Score: 2/4"));
        assert!(report.contains("Warning: This is similar"));
        assert!(report.contains("- Add another word or two."));
    }
}
