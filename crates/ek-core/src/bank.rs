//! The fixed geography question bank.
//!
//! The bank is hardcoded: fifteen questions covering capitals, landmarks,
//! and physical geography. It is built once at startup and never mutated.

use crate::error::QuizResult;
use crate::question::{AnswerLetter, Question};

/// Static bank data: question text, choices in A-D order, correct letter.
const BANK_DATA: &[(&str, [&str; 4], AnswerLetter)] = &[
    (
        "What is the capital of Australia?",
        ["Sydney", "Canberra", "Melbourne", "Brisbane"],
        AnswerLetter::B,
    ),
    (
        "Which river is the longest in the world?",
        ["Amazon", "Nile", "Yangtze", "Mississippi"],
        AnswerLetter::B,
    ),
    (
        "What is the largest desert in the world?",
        ["Sahara", "Arabian", "Gobi", "Kalahari"],
        AnswerLetter::A,
    ),
    (
        "Which country has the most natural lakes?",
        ["Canada", "Russia", "USA", "India"],
        AnswerLetter::A,
    ),
    (
        "What mountain range separates Europe from Asia?",
        ["Andes", "Himalayas", "Ural Mountains", "Rockies"],
        AnswerLetter::C,
    ),
    (
        "Which country is known for its pyramids?",
        ["Greece", "Egypt", "Mexico", "Italy"],
        AnswerLetter::B,
    ),
    (
        "What is the smallest country in the world?",
        ["Monaco", "Vatican City", "Nauru", "San Marino"],
        AnswerLetter::B,
    ),
    (
        "Which ocean is the largest?",
        ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
        AnswerLetter::D,
    ),
    (
        "What is the capital of Japan?",
        ["Beijing", "Seoul", "Tokyo", "Bangkok"],
        AnswerLetter::C,
    ),
    (
        "Which of these cities is not a capital?",
        ["Madrid", "Berlin", "New York", "Ottawa"],
        AnswerLetter::C,
    ),
    (
        "Which city is known as the Big Apple?",
        ["Los Angeles", "Chicago", "New York City", "San Francisco"],
        AnswerLetter::C,
    ),
    (
        "What is the largest island in the world?",
        ["Greenland", "New Guinea", "Borneo", "Madagascar"],
        AnswerLetter::A,
    ),
    (
        "Which country has a maple leaf on its flag?",
        ["USA", "Canada", "Australia", "Mexico"],
        AnswerLetter::B,
    ),
    (
        "What is the capital of Egypt?",
        ["Cairo", "Alexandria", "Giza", "Luxor"],
        AnswerLetter::A,
    ),
    (
        "Which continent is the only one without any deserts?",
        ["Europe", "Antarctica", "South America", "North America"],
        AnswerLetter::B,
    ),
];

/// The immutable, ordered set of available quiz questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build the bank from the static data, validating every question.
    ///
    /// Fails only on malformed static data.
    pub fn load() -> QuizResult<Self> {
        let questions = BANK_DATA
            .iter()
            .map(|(text, choices, answer)| {
                Question::new(*text, choices.map(String::from), *answer)
            })
            .collect::<QuizResult<Vec<_>>>()?;
        Ok(Self { questions })
    }

    /// All questions in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a question by bank position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
