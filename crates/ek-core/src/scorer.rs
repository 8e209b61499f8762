//! Answer checking and tally updates.

use crate::question::{AnswerLetter, Question};
use crate::user::User;

/// Whether the submitted letter is the question's correct answer.
///
/// Case normalization happens when the letter is parsed; by the time an
/// `AnswerLetter` exists the comparison is exact.
pub fn check_answer(question: &Question, submitted: AnswerLetter) -> bool {
    submitted == question.answer
}

/// Check an answer and apply it to the user's tallies.
///
/// Correct: `score` and `correct_total` each gain one. Incorrect:
/// `incorrect_total` gains one. Returns the correctness.
pub fn score_answer(user: &mut User, question: &Question, submitted: AnswerLetter) -> bool {
    let correct = check_answer(question, submitted);
    if correct {
        user.score += 1;
        user.correct_total += 1;
    } else {
        user.incorrect_total += 1;
    }
    correct
}
