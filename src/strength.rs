//! Heuristic password strength rating.
//!
//! Five independent checks each add one point to a score between 0 and 5,
//! which maps onto a [`Strength`] label.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Visual category used to render a [`Strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
    Amber,
    Green,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::VeryWeak,
            2 => Strength::Weak,
            3 => Strength::Medium,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Strength::VeryWeak => Tone::Red,
            Strength::Weak => Tone::Orange,
            Strength::Medium => Tone::Amber,
            Strength::Strong | Strength::VeryStrong => Tone::Green,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checks {
    pub length_8: bool,
    pub length_12: bool,
    pub mixed_case: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Checks {
    pub fn score(&self) -> u8 {
        [
            self.length_8,
            self.length_12,
            self.mixed_case,
            self.digit,
            self.symbol,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as u8
    }

    /// Each check with a short description, in scoring order.
    pub fn describe(&self) -> [(&'static str, bool); 5] {
        [
            ("at least 8 chars", self.length_8),
            ("at least 12 chars", self.length_12),
            ("upper and lower case", self.mixed_case),
            ("digit", self.digit),
            ("symbol", self.symbol),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub strength: Strength,
    pub checks: Checks,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn tone(&self) -> Tone {
        self.strength.tone()
    }
}

pub fn evaluate(password: &str) -> StrengthResult {
    let length = password.chars().count();

    let checks = Checks {
        length_8: length >= 8,
        length_12: length >= 12,
        mixed_case: password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    };

    let score = checks.score();

    StrengthResult {
        score,
        strength: Strength::from_score(score),
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_very_weak() {
        let result = evaluate("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label(), "Very Weak");
        assert_eq!(result.tone(), Tone::Red);
    }

    #[test]
    fn test_lowercase_eight() {
        let result = evaluate("abcdefgh");
        assert_eq!(result.score, 1);
        assert_eq!(result.strength, Strength::VeryWeak);
        assert!(result.checks.length_8);
        assert!(!result.checks.length_12);
    }

    #[test]
    fn test_everything_is_very_strong() {
        let result = evaluate("Abcdefgh12!@");
        assert_eq!(result.score, 5);
        assert_eq!(result.label(), "Very Strong");
        assert_eq!(result.tone(), Tone::Green);
    }

    #[test]
    fn test_mixed_case_is_a_single_point() {
        assert_eq!(evaluate("aB").score, 1);
        assert_eq!(evaluate("ab").score, 0);
        assert_eq!(evaluate("AB").score, 0);
    }

    #[test]
    fn test_score_ladder() {
        let cases = vec![
            ("abc", 0, Strength::VeryWeak),
            ("abc1", 1, Strength::VeryWeak),
            ("abcdefg1", 2, Strength::Weak),
            ("Abcdefg1", 3, Strength::Medium),
            ("Abcdefghijk1", 4, Strength::Strong),
            ("Abcdefghij1!", 5, Strength::VeryStrong),
        ];

        for (password, score, strength) in cases {
            let result = evaluate(password);
            assert_eq!(result.score, score, "Score mismatch for {:?}", password);
            assert_eq!(result.strength, strength, "Label mismatch for {:?}", password);
        }
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let result = evaluate("caf\u{e9}");
        assert!(result.checks.symbol);
        assert!(evaluate(" ").checks.symbol);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(!evaluate("\u{e9}\u{e9}\u{e9}\u{e9}").checks.length_8);
        assert!(evaluate("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}").checks.length_8);
    }

    #[test]
    fn test_deterministic() {
        for password in ["", "hunter2", "Abcdefgh12!@", "correct horse battery staple"] {
            assert_eq!(evaluate(password), evaluate(password));
        }
    }

    #[test]
    fn test_from_score_saturates() {
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
        assert_eq!(Strength::from_score(5), Strength::VeryStrong);
        assert_eq!(Strength::from_score(9), Strength::VeryStrong);
    }

    #[test]
    fn test_tones() {
        assert_eq!(Strength::Weak.tone(), Tone::Orange);
        assert_eq!(Strength::Medium.tone(), Tone::Amber);
        assert_eq!(Strength::Strong.tone(), Tone::Green);
    }
}
