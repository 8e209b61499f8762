//! Configuration for a quiz run.

/// Configuration for a quiz run.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible question shuffles.
    pub seed: u64,
    /// Preselected question count; `None` means prompt each user.
    pub count: Option<usize>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: None,
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Preselect the question count for every session.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}
