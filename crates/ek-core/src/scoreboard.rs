//! The cumulative results collection across sessions.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Finished users in the order their sessions completed.
///
/// Owned by the play loop for the lifetime of the process; nothing global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    users: Vec<User>,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished user.
    pub fn record(&mut self, user: User) {
        self.users.push(user);
    }

    /// All recorded users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of recorded users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no sessions have completed.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The user with the highest score. Ties go to the earliest recorded
    /// user, so this is an explicit fold rather than `max_by_key` (which
    /// keeps the last maximum).
    pub fn highest(&self) -> Option<&User> {
        let mut best: Option<&User> = None;
        for user in &self.users {
            match best {
                Some(b) if user.score <= b.score => {}
                _ => best = Some(user),
            }
        }
        best
    }

    /// Mean of each user's fractional score, unweighted by question count.
    pub fn average_fraction(&self) -> f64 {
        if self.users.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.users.iter().map(User::fraction).sum();
        sum / self.users.len() as f64
    }
}
