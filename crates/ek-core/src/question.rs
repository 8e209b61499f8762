//! Multiple-choice questions and answer letters.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};

/// One of the four answer slots of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerLetter {
    /// First choice.
    A,
    /// Second choice.
    B,
    /// Third choice.
    C,
    /// Fourth choice.
    D,
}

impl AnswerLetter {
    /// Parse a letter from user input, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    /// All letters in choice order.
    pub fn all() -> &'static [Self] {
        &[Self::A, Self::B, Self::C, Self::D]
    }

    /// Position of this letter's choice (0-3).
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl std::fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// A multiple-choice question with exactly four choices.
///
/// Choices are stored unlabeled in letter order; labels are derived from
/// position when rendering, so the correct choice text is an index lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// The four choices, in A-D order.
    pub choices: [String; 4],
    /// The letter of the correct choice.
    pub answer: AnswerLetter,
}

impl Question {
    /// Create a question, validating that the text and every choice are
    /// non-empty.
    pub fn new(
        text: impl Into<String>,
        choices: [String; 4],
        answer: AnswerLetter,
    ) -> QuizResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::MalformedQuestion("empty question text".into()));
        }
        if let Some(i) = choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuizError::MalformedQuestion(format!(
                "empty choice {} in \"{text}\"",
                AnswerLetter::all()[i]
            )));
        }
        Ok(Self {
            text,
            choices,
            answer,
        })
    }

    /// The choice text for a letter.
    pub fn choice(&self, letter: AnswerLetter) -> &str {
        &self.choices[letter.index()]
    }

    /// The text of the correct choice.
    pub fn correct_choice(&self) -> &str {
        self.choice(self.answer)
    }

    /// The choices rendered with their letter labels, e.g. "A) Sydney".
    pub fn labeled_choices(&self) -> impl Iterator<Item = String> + '_ {
        AnswerLetter::all()
            .iter()
            .map(|letter| format!("{letter}) {}", self.choice(*letter)))
    }
}
