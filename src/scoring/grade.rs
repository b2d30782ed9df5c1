//! Threshold ladders for per-round grades and cumulative ranks

/// Round grades, highest threshold first
const GRADES: [(i64, &str); 6] = [
    (3000, "S"),
    (2500, "A+"),
    (2000, "A"),
    (1500, "B"),
    (1000, "C"),
    (500, "D"),
];

const LOWEST_GRADE: &str = "F";

/// Player ranks by total score, highest threshold first
const RANKS: [(i64, &str); 6] = [
    (50_000, "Grand Master"),
    (30_000, "Master"),
    (20_000, "Expert"),
    (10_000, "Advanced"),
    (5_000, "Intermediate"),
    (2_000, "Novice"),
];

const LOWEST_RANK: &str = "Beginner";

fn climb(ladder: &[(i64, &'static str)], value: i64, floor: &'static str) -> &'static str {
    ladder
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(floor, |(_, label)| label)
}

/// Letter grade for a single round's score
///
/// Total over all integers; anything below 500 is `"F"`.
#[must_use]
pub fn grade_for(score: i64) -> &'static str {
    climb(&GRADES, score, LOWEST_GRADE)
}

/// Rank title for a cumulative score
///
/// # Examples
/// ```
/// use digitdash::scoring::rank_for;
///
/// assert_eq!(rank_for(2688), "Novice");
/// assert_eq!(rank_for(1999), "Beginner");
/// ```
#[must_use]
pub fn rank_for(total_score: i64) -> &'static str {
    climb(&RANKS, total_score, LOWEST_RANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(grade_for(5000), "S");
        assert_eq!(grade_for(3000), "S");
        assert_eq!(grade_for(2999), "A+");
        assert_eq!(grade_for(2688), "A+");
        assert_eq!(grade_for(2500), "A+");
        assert_eq!(grade_for(2000), "A");
        assert_eq!(grade_for(1999), "B");
        assert_eq!(grade_for(1500), "B");
        assert_eq!(grade_for(1000), "C");
        assert_eq!(grade_for(500), "D");
        assert_eq!(grade_for(499), "F");
        assert_eq!(grade_for(0), "F");
    }

    #[test]
    fn grade_negative_falls_through() {
        assert_eq!(grade_for(-1), "F");
        assert_eq!(grade_for(i64::MIN), "F");
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(rank_for(100_000), "Grand Master");
        assert_eq!(rank_for(50_000), "Grand Master");
        assert_eq!(rank_for(49_999), "Master");
        assert_eq!(rank_for(30_000), "Master");
        assert_eq!(rank_for(20_000), "Expert");
        assert_eq!(rank_for(10_000), "Advanced");
        assert_eq!(rank_for(5_000), "Intermediate");
        assert_eq!(rank_for(4_999), "Novice");
        assert_eq!(rank_for(2_000), "Novice");
        assert_eq!(rank_for(1_999), "Beginner");
        assert_eq!(rank_for(0), "Beginner");
        assert_eq!(rank_for(-50), "Beginner");
    }

    #[test]
    fn single_quick_easy_win_grades_and_ranks() {
        let score = crate::scoring::compute_score(crate::core::Difficulty::Easy, 3, 20);
        assert_eq!(grade_for(score), "A+");
        assert_eq!(rank_for(score), "Novice");
    }
}
