//! zxcvbn-backed strength oracle

use super::{StrengthOracle, StrengthResult};

/// Estimates strength with the zxcvbn pattern matcher
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnOracle {
    /// Extra words (names, dates) that should count against a password
    user_inputs: Vec<String>,
}

impl ZxcvbnOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Penalize passwords built from these words
    pub fn with_user_inputs(mut self, inputs: Vec<String>) -> Self {
        self.user_inputs = inputs;
        self
    }
}

impl StrengthOracle for ZxcvbnOracle {
    fn score(&self, password: &str) -> StrengthResult {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback.suggestions().iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };

        StrengthResult {
            score: entropy.score() as u8,
            crack_time_display: entropy
                .crack_times()
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
            warning,
            suggestions,
        }
    }

    fn name(&self) -> &'static str {
        "zxcvbn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_password_scores_low() {
        let result = ZxcvbnOracle::new().score("password");
        assert!(result.score <= 1);
        assert!(!result.crack_time_display.is_empty());
    }

    #[test]
    fn test_long_passphrase_scores_higher() {
        let oracle = ZxcvbnOracle::new();
        let weak = oracle.score("password");
        let strong = oracle.score("correct-Horse-battery-staple-93!");
        assert!(strong.score > weak.score);
    }

    #[test]
    fn test_user_inputs_penalize() {
        let plain = ZxcvbnOracle::new().score("tessstone1990");
        let informed = ZxcvbnOracle::new()
            .with_user_inputs(vec!["tess".to_string(), "stone".to_string(), "1990".to_string()])
            .score("tessstone1990");
        assert!(informed.score <= plain.score);
    }
}
