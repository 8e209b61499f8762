//! Error types for the quiz engine.

/// Alias for `Result<T, QuizError>`.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur in the quiz engine.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// A question in the static bank data failed validation.
    #[error("malformed question: {0}")]
    MalformedQuestion(String),

    /// The requested question count is outside `1..=available`.
    #[error("invalid question count: requested {requested}, bank has {available}")]
    InvalidQuestionCount {
        /// The count that was asked for.
        requested: usize,
        /// Number of questions in the bank.
        available: usize,
    },

    /// An answer was submitted after the last question.
    #[error("session already complete")]
    SessionComplete,

    /// The session was finished with questions still unanswered.
    #[error("session incomplete: {remaining} question(s) unanswered")]
    SessionIncomplete {
        /// Questions left without an answer.
        remaining: usize,
    },

    /// The requested export format is not recognized.
    #[error("unknown export format '{0}', use: json, markdown, text")]
    UnknownExportFormat(String),

    /// Standings could not be serialized to JSON.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
