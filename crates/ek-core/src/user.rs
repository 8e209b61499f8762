//! Quiz takers and their tallies.

use serde::{Deserialize, Serialize};

/// A quiz taker and their running tallies.
///
/// Created when a session starts, mutated only by the scorer while that
/// session runs, then recorded on the scoreboard unchanged. The tallies
/// keep `score == correct_total` at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name, validated at the prompt boundary.
    pub name: String,
    /// Points earned, one per correct answer.
    pub score: u32,
    /// Questions answered correctly.
    pub correct_total: u32,
    /// Questions answered incorrectly.
    pub incorrect_total: u32,
}

impl User {
    /// Create a user with zeroed tallies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            correct_total: 0,
            incorrect_total: 0,
        }
    }

    /// Total questions this user has answered.
    pub fn answered(&self) -> u32 {
        self.correct_total + self.incorrect_total
    }

    /// Score as a fraction of questions answered, 0.0 if none answered.
    pub fn fraction(&self) -> f64 {
        if self.answered() == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.answered())
        }
    }

    /// Score as a percentage of questions answered, rounded to two decimals.
    pub fn percentage(&self) -> f64 {
        (self.fraction() * 10_000.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_zeroed_tallies() {
        let u = User::new("Alice");
        assert_eq!(u.name, "Alice");
        assert_eq!(u.score, 0);
        assert_eq!(u.answered(), 0);
        assert_eq!(u.percentage(), 0.0);
    }

    #[test]
    fn answered_sums_tallies() {
        let u = User {
            name: "Bob".into(),
            score: 3,
            correct_total: 3,
            incorrect_total: 2,
        };
        assert_eq!(u.answered(), 5);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        let u = User {
            name: "Cara".into(),
            score: 1,
            correct_total: 1,
            incorrect_total: 2,
        };
        assert_eq!(u.percentage(), 33.33);
    }

    #[test]
    fn perfect_run_is_one_hundred() {
        let u = User {
            name: "Dana".into(),
            score: 15,
            correct_total: 15,
            incorrect_total: 0,
        };
        assert_eq!(u.percentage(), 100.0);
        assert_eq!(u.fraction(), 1.0);
    }

    #[test]
    fn serde_roundtrip() {
        let u = User {
            name: "Eve-Marie".into(),
            score: 2,
            correct_total: 2,
            incorrect_total: 1,
        };
        let json = serde_json::to_string(&u).unwrap();
        let u2: User = serde_json::from_str(&json).unwrap();
        assert_eq!(u2.name, "Eve-Marie");
        assert_eq!(u2.answered(), 3);
    }
}
