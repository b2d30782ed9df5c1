//! Difficulty tiers and their fixed parameters
//!
//! Each tier is keyed to a static [`DifficultyProfile`] holding the guessable
//! range, the attempt cap and the score multiplier.

use std::fmt;
use std::str::FromStr;

/// Numeric parameters of a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    min_value: i32,
    max_value: i32,
    max_attempts: u32,
    score_multiplier: f64,
}

impl DifficultyProfile {
    const fn new(min_value: i32, max_value: i32, max_attempts: u32, score_multiplier: f64) -> Self {
        Self {
            min_value,
            max_value,
            max_attempts,
            score_multiplier,
        }
    }

    /// Smallest guessable value (inclusive)
    #[inline]
    #[must_use]
    pub const fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Largest guessable value (inclusive)
    #[inline]
    #[must_use]
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Maximum number of guesses allowed per round
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Factor applied to the base score
    #[inline]
    #[must_use]
    pub const fn score_multiplier(&self) -> f64 {
        self.score_multiplier
    }

    /// Number of distinct values in the range
    #[inline]
    #[must_use]
    pub const fn range_size(&self) -> u32 {
        (self.max_value - self.min_value + 1) as u32
    }

    /// Check whether `value` lies inside the inclusive range
    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

const EASY: DifficultyProfile = DifficultyProfile::new(1, 50, 12, 1.0);
const MEDIUM: DifficultyProfile = DifficultyProfile::new(1, 100, 10, 1.5);
const HARD: DifficultyProfile = DifficultyProfile::new(1, 500, 8, 2.0);

/// The three selectable difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Get the parameter record for this tier
    ///
    /// # Examples
    /// ```
    /// use digitdash::core::Difficulty;
    ///
    /// let profile = Difficulty::Hard.profile();
    /// assert_eq!(profile.max_value(), 500);
    /// assert_eq!(profile.max_attempts(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub const fn profile(self) -> &'static DifficultyProfile {
        match self {
            Self::Easy => &EASY,
            Self::Medium => &MEDIUM,
            Self::Hard => &HARD,
        }
    }

    /// Upper-case display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    /// Human-readable summary like `"EASY (1-50, 12 attempts)"`
    #[must_use]
    pub fn description(self) -> String {
        let profile = self.profile();
        format!(
            "{} ({}-{}, {} attempts)",
            self.name(),
            profile.min_value(),
            profile.max_value(),
            profile.max_attempts()
        )
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for unrecognized difficulty names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    Unknown(String),
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "Unknown difficulty '{name}' (expected easy, medium or hard)"
            ),
        }
    }
}

impl std::error::Error for DifficultyError {}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parse a tier name, case-insensitively
    ///
    /// Accepts the full name, its first letter, or the menu number (1-3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            _ => Err(DifficultyError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_match_tier_table() {
        let easy = Difficulty::Easy.profile();
        assert_eq!((easy.min_value(), easy.max_value()), (1, 50));
        assert_eq!(easy.max_attempts(), 12);
        assert!((easy.score_multiplier() - 1.0).abs() < f64::EPSILON);

        let medium = Difficulty::Medium.profile();
        assert_eq!((medium.min_value(), medium.max_value()), (1, 100));
        assert_eq!(medium.max_attempts(), 10);
        assert!((medium.score_multiplier() - 1.5).abs() < f64::EPSILON);

        let hard = Difficulty::Hard.profile();
        assert_eq!((hard.min_value(), hard.max_value()), (1, 500));
        assert_eq!(hard.max_attempts(), 8);
        assert!((hard.score_multiplier() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn range_size_is_positive_and_inclusive() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let expected = (profile.max_value() - profile.min_value() + 1) as u32;
            assert_eq!(profile.range_size(), expected);
            assert!(profile.range_size() > 0);
            assert!(profile.max_attempts() >= 1);
            assert!(profile.score_multiplier() > 0.0);
        }
        assert_eq!(Difficulty::Easy.profile().range_size(), 50);
        assert_eq!(Difficulty::Hard.profile().range_size(), 500);
    }

    #[test]
    fn contains_is_inclusive() {
        let profile = Difficulty::Medium.profile();
        assert!(profile.contains(1));
        assert!(profile.contains(100));
        assert!(!profile.contains(0));
        assert!(!profile.contains(101));
    }

    #[test]
    fn description_format() {
        assert_eq!(Difficulty::Easy.description(), "EASY (1-50, 12 attempts)");
        assert_eq!(Difficulty::Hard.description(), "HARD (1-500, 8 attempts)");
        assert_eq!(format!("{}", Difficulty::Medium), "MEDIUM");
    }

    #[test]
    fn parse_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" h ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Medium));
    }

    #[test]
    fn parse_unknown_name() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, DifficultyError::Unknown("extreme".to_string()));
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn all_is_ordered_easiest_first() {
        assert_eq!(
            Difficulty::ALL,
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }
}
