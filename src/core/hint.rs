//! Proximity hints for missed guesses
//!
//! A hint classifies how far a guess landed from the secret as a percentage of
//! the tier's span (`max - min`), and on HARD may also point at the half of the
//! range that holds the secret when the guess is far off.

use super::Difficulty;

/// Distance beyond which HARD rounds get a range-half hint
const FOCUS_DISTANCE: u32 = 100;

/// Temperature ladder, hottest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    /// Within 5% of the span
    BurningHot,
    /// Within 10%
    VeryWarm,
    /// Within 20%
    Warm,
    /// Within 40%
    Cool,
    Cold,
}

impl Temperature {
    /// Classify a percentage distance
    #[must_use]
    pub fn from_percent_off(percent_off: f64) -> Self {
        if percent_off <= 5.0 {
            Self::BurningHot
        } else if percent_off <= 10.0 {
            Self::VeryWarm
        } else if percent_off <= 20.0 {
            Self::Warm
        } else if percent_off <= 40.0 {
            Self::Cool
        } else {
            Self::Cold
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BurningHot => "Burning hot! You're extremely close!",
            Self::VeryWarm => "Very warm! Getting closer!",
            Self::Warm => "Warm! You're in the right area.",
            Self::Cool => "Cool. Keep searching!",
            Self::Cold => "Cold. Try a different range!",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::BurningHot => "🔥",
            Self::VeryWarm => "♨️",
            Self::Warm => "🌡️",
            Self::Cool => "❄️",
            Self::Cold => "🧊",
        }
    }
}

/// Which half of the full range holds the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeHalf {
    Lower,
    Upper,
}

impl RangeHalf {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Lower => "Focus on the lower half of the range.",
            Self::Upper => "Focus on the upper half of the range.",
        }
    }
}

/// Proximity feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub temperature: Temperature,
    pub focus: Option<RangeHalf>,
}

impl Hint {
    /// Classify `guess` against `secret` for the given tier
    ///
    /// # Examples
    /// ```
    /// use digitdash::core::{Difficulty, Hint, Temperature};
    ///
    /// // 2 away on a span of 99 is about 2%
    /// let hint = Hint::classify(73, 75, Difficulty::Medium);
    /// assert_eq!(hint.temperature, Temperature::BurningHot);
    /// assert_eq!(hint.focus, None);
    /// ```
    #[must_use]
    pub fn classify(guess: i32, secret: i32, difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        let difference = secret.abs_diff(guess);
        let span = (profile.max_value() - profile.min_value()).max(1);
        let percent_off = f64::from(difference) / f64::from(span) * 100.0;

        let focus = (difficulty == Difficulty::Hard && difference > FOCUS_DISTANCE).then(|| {
            let midpoint = (profile.min_value() + profile.max_value()) / 2;
            if secret < midpoint {
                RangeHalf::Lower
            } else {
                RangeHalf::Upper
            }
        });

        Self {
            temperature: Temperature::from_percent_off(percent_off),
            focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries_are_inclusive() {
        assert_eq!(Temperature::from_percent_off(0.0), Temperature::BurningHot);
        assert_eq!(Temperature::from_percent_off(5.0), Temperature::BurningHot);
        assert_eq!(Temperature::from_percent_off(5.01), Temperature::VeryWarm);
        assert_eq!(Temperature::from_percent_off(10.0), Temperature::VeryWarm);
        assert_eq!(Temperature::from_percent_off(20.0), Temperature::Warm);
        assert_eq!(Temperature::from_percent_off(40.0), Temperature::Cool);
        assert_eq!(Temperature::from_percent_off(40.5), Temperature::Cold);
    }

    #[test]
    fn classify_uses_span_not_range_size() {
        // Easy span is 49: 2/49 ≈ 4.1% hot, 3/49 ≈ 6.1% very warm
        assert_eq!(
            Hint::classify(23, 25, Difficulty::Easy).temperature,
            Temperature::BurningHot
        );
        assert_eq!(
            Hint::classify(22, 25, Difficulty::Easy).temperature,
            Temperature::VeryWarm
        );
    }

    #[test]
    fn classify_is_symmetric_in_direction() {
        let low = Hint::classify(40, 60, Difficulty::Medium);
        let high = Hint::classify(80, 60, Difficulty::Medium);
        assert_eq!(low, high);
        assert_eq!(low.temperature, Temperature::Cool);
    }

    #[test]
    fn far_guess_is_cold() {
        let hint = Hint::classify(1, 100, Difficulty::Medium);
        assert_eq!(hint.temperature, Temperature::Cold);
        assert_eq!(hint.focus, None);
    }

    #[test]
    fn hard_far_guess_gets_focus() {
        // midpoint of 1..=500 is 250
        let lower = Hint::classify(400, 120, Difficulty::Hard);
        assert_eq!(lower.focus, Some(RangeHalf::Lower));

        let upper = Hint::classify(10, 450, Difficulty::Hard);
        assert_eq!(upper.focus, Some(RangeHalf::Upper));

        let at_midpoint = Hint::classify(1, 250, Difficulty::Hard);
        assert_eq!(at_midpoint.focus, Some(RangeHalf::Upper));
    }

    #[test]
    fn hard_near_guess_has_no_focus() {
        let hint = Hint::classify(300, 400, Difficulty::Hard);
        assert_eq!(hint.focus, None);
    }

    #[test]
    fn extreme_guesses_are_cold() {
        for guess in [i32::MIN, i32::MAX] {
            let hint = Hint::classify(guess, 250, Difficulty::Hard);
            assert_eq!(hint.temperature, Temperature::Cold);
            assert_eq!(hint.focus, Some(RangeHalf::Upper));
        }
    }

    #[test]
    fn focus_only_on_hard() {
        // 100+ away is impossible on Easy, but Medium can reach 99
        let hint = Hint::classify(1, 100, Difficulty::Medium);
        assert_eq!(hint.focus, None);
    }
}
