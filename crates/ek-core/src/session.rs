//! One user's pass through a shuffled subset of the bank.
//!
//! The session is a cursor over the selected questions: the caller shows
//! `current()`, collects a validated letter, and calls `submit()`, which
//! scores the answer and advances. The core never touches stdin or stdout;
//! the CLI drives the loop and renders the returned feedback.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::bank::QuestionBank;
use crate::error::{QuizError, QuizResult};
use crate::question::{AnswerLetter, Question};
use crate::scorer::score_answer;
use crate::user::User;

/// Shuffle the full bank and take the first `n` questions.
///
/// Every call produces a fresh permutation, so repeated sessions see
/// independently randomized orders and subsets. `n` must be in
/// `1..=bank.len()`.
pub fn select_questions(
    bank: &QuestionBank,
    n: usize,
    rng: &mut StdRng,
) -> QuizResult<Vec<Question>> {
    if !(1..=bank.len()).contains(&n) {
        return Err(QuizError::InvalidQuestionCount {
            requested: n,
            available: bank.len(),
        });
    }
    let mut questions = bank.questions().to_vec();
    questions.shuffle(rng);
    questions.truncate(n);
    Ok(questions)
}

/// The outcome of one submitted answer.
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Whether the submitted letter was correct.
    pub correct: bool,
    /// The correct letter for the question just answered.
    pub answer: AnswerLetter,
    /// The text of the correct choice.
    pub correct_choice: String,
}

/// An active quiz run: one user plus their selected questions.
#[derive(Debug)]
pub struct Session {
    user: User,
    questions: Vec<Question>,
    cursor: usize,
}

impl Session {
    /// Begin a session for a user over an already-selected question list.
    pub fn new(user: User, questions: Vec<Question>) -> Self {
        Self {
            user,
            questions,
            cursor: 0,
        }
    }

    /// The question awaiting an answer, if any remain.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// 1-based number of the current question, for display.
    pub fn number(&self) -> usize {
        self.cursor + 1
    }

    /// Total questions in this session.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// The user and their tallies so far.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Score a letter against the current question and advance.
    pub fn submit(&mut self, letter: AnswerLetter) -> QuizResult<Feedback> {
        let question = self
            .questions
            .get(self.cursor)
            .ok_or(QuizError::SessionComplete)?;
        let correct = score_answer(&mut self.user, question, letter);
        let feedback = Feedback {
            correct,
            answer: question.answer,
            correct_choice: question.correct_choice().to_string(),
        };
        self.cursor += 1;
        Ok(feedback)
    }

    /// Consume the completed session and return the updated user.
    pub fn finish(self) -> QuizResult<User> {
        if !self.is_complete() {
            return Err(QuizError::SessionIncomplete {
                remaining: self.questions.len() - self.cursor,
            });
        }
        Ok(self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn bank() -> QuestionBank {
        QuestionBank::load().unwrap()
    }

    #[test]
    fn select_full_bank() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(42);
        let questions = select_questions(&bank, 15, &mut rng).unwrap();
        assert_eq!(questions.len(), 15);
    }

    #[test]
    fn select_rejects_zero() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(42);
        let result = select_questions(&bank, 0, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::InvalidQuestionCount { requested: 0, .. })
        ));
    }

    #[test]
    fn select_rejects_more_than_bank() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(42);
        let result = select_questions(&bank, 16, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::InvalidQuestionCount {
                requested: 16,
                available: 15,
            })
        ));
    }

    #[test]
    fn selection_has_no_duplicates() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=bank.len() {
            let questions = select_questions(&bank, n, &mut rng).unwrap();
            assert_eq!(questions.len(), n);
            let mut texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), n);
        }
    }

    #[test]
    fn selection_draws_from_bank() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(3);
        let questions = select_questions(&bank, 5, &mut rng).unwrap();
        for q in &questions {
            assert!(bank.questions().iter().any(|b| b.text == q.text));
        }
    }

    #[test]
    fn same_seed_same_selection() {
        let bank = bank();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = select_questions(&bank, 5, &mut rng1).unwrap();
        let b = select_questions(&bank, 5, &mut rng2).unwrap();
        let texts_a: Vec<&str> = a.iter().map(|q| q.text.as_str()).collect();
        let texts_b: Vec<&str> = b.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts_a, texts_b);
    }

    #[test]
    fn session_walks_questions_in_order() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(42);
        let questions = select_questions(&bank, 3, &mut rng).unwrap();
        let expected: Vec<String> = questions.iter().map(|q| q.text.clone()).collect();

        let mut session = Session::new(User::new("Alice"), questions);
        assert_eq!(session.len(), 3);
        for text in &expected {
            assert_eq!(&session.current().unwrap().text, text);
            assert_eq!(session.number(), session.user().answered() as usize + 1);
            let answer = session.current().unwrap().answer;
            session.submit(answer).unwrap();
        }
        assert!(session.is_complete());
        assert!(session.current().is_none());
    }

    #[test]
    fn submit_returns_feedback() {
        let bank = bank();
        let questions = vec![bank.get(0).unwrap().clone()];
        let mut session = Session::new(User::new("Alice"), questions);

        let feedback = session.submit(AnswerLetter::A).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.answer, AnswerLetter::B);
        assert_eq!(feedback.correct_choice, "Canberra");
    }

    #[test]
    fn submit_after_completion_errors() {
        let bank = bank();
        let questions = vec![bank.get(0).unwrap().clone()];
        let mut session = Session::new(User::new("Alice"), questions);
        session.submit(AnswerLetter::B).unwrap();
        assert!(matches!(
            session.submit(AnswerLetter::B),
            Err(QuizError::SessionComplete)
        ));
    }

    #[test]
    fn finish_requires_completion() {
        let bank = bank();
        let questions = vec![bank.get(0).unwrap().clone(), bank.get(1).unwrap().clone()];
        let session = Session::new(User::new("Alice"), questions);
        assert!(matches!(
            session.finish(),
            Err(QuizError::SessionIncomplete { remaining: 2 })
        ));
    }

    #[test]
    fn finished_session_returns_tallied_user() {
        let bank = bank();
        let questions = vec![bank.get(0).unwrap().clone(), bank.get(1).unwrap().clone()];
        let mut session = Session::new(User::new("Alice"), questions);
        session.submit(AnswerLetter::B).unwrap(); // Canberra, correct
        session.submit(AnswerLetter::A).unwrap(); // Nile is B, incorrect

        let user = session.finish().unwrap();
        assert_eq!(user.score, 1);
        assert_eq!(user.correct_total, 1);
        assert_eq!(user.incorrect_total, 1);
        assert_eq!(user.answered(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selection_is_distinct_subset(seed: u64, n in 1usize..=15) {
                let bank = QuestionBank::load().unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let questions = select_questions(&bank, n, &mut rng).unwrap();
                prop_assert_eq!(questions.len(), n);
                let mut texts: Vec<&str> =
                    questions.iter().map(|q| q.text.as_str()).collect();
                texts.sort_unstable();
                texts.dedup();
                prop_assert_eq!(texts.len(), n);
            }

            #[test]
            fn tallies_always_balance(seed: u64, n in 1usize..=15, letters: Vec<u8>) {
                let bank = QuestionBank::load().unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let questions = select_questions(&bank, n, &mut rng).unwrap();
                let mut session = Session::new(User::new("Prop"), questions);

                let mut answered = 0u32;
                for raw in letters.iter().take(n) {
                    let letter = AnswerLetter::all()[(*raw as usize) % 4];
                    session.submit(letter).unwrap();
                    answered += 1;
                    let user = session.user();
                    prop_assert_eq!(user.score, user.correct_total);
                    prop_assert_eq!(user.answered(), answered);
                }
            }
        }
    }
}
