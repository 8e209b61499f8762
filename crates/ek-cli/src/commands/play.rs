//! The interactive quiz: the multi-user loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ek_core::{
    ExportFormat, Question, QuestionBank, QuizConfig, Scoreboard, Session, User, report,
    select_questions,
};

use crate::prompt;

/// The multi-user loop, one state per phase. `AwaitingContinue` loops back
/// to `AwaitingUser` until the operator declines.
enum LoopState {
    /// Collect a name and create a fresh user.
    AwaitingUser,
    /// Pick a question count, run the user's session.
    RunningSession(User),
    /// Show the user's results and record them.
    RecordingResult(User),
    /// Ask whether another user wants a turn.
    AwaitingContinue,
    /// Report across all recorded users, then stop.
    Finalizing,
}

/// Run the interactive quiz until the operator declines another round.
pub fn run(seed: Option<u64>, count: Option<usize>, export: Option<&str>) -> Result<(), String> {
    let bank = QuestionBank::load().map_err(|e| e.to_string())?;

    let export = export
        .map(ExportFormat::parse)
        .transpose()
        .map_err(|e| e.to_string())?;

    let mut config = QuizConfig::default().with_seed(seed.unwrap_or_else(|| rand::rng().random()));
    if let Some(n) = count {
        if !(1..=bank.len()).contains(&n) {
            return Err(format!(
                "--count must be between 1 and {}, got {n}",
                bank.len()
            ));
        }
        config = config.with_count(n);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let board = run_loop(&bank, &config, &mut input, &mut output)?;

    if let Some(format) = export
        && !board.is_empty()
    {
        let rendered = report::export(&board, format).map_err(|e| e.to_string())?;
        println!("\n{rendered}");
    }

    Ok(())
}

/// Drive the state machine over the given reader and writer. Returns the
/// scoreboard of every completed session.
fn run_loop<R: BufRead, W: Write>(
    bank: &QuestionBank,
    config: &QuizConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Scoreboard, String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut board = Scoreboard::new();
    let mut state = LoopState::AwaitingUser;

    loop {
        state = match state {
            LoopState::AwaitingUser => {
                writeln!(output, "\nWelcome to the Quiz! Let's get started!")
                    .map_err(|e| e.to_string())?;
                let name = prompt::prompt_name(input, output).map_err(|e| e.to_string())?;
                LoopState::RunningSession(User::new(name))
            }

            LoopState::RunningSession(user) => {
                let n = match config.count {
                    Some(n) => n,
                    None => prompt::prompt_question_count(input, output, bank.len())
                        .map_err(|e| e.to_string())?,
                };
                let questions = select_questions(bank, n, &mut rng).map_err(|e| e.to_string())?;
                let session = run_session(user, questions, input, output)?;
                LoopState::RecordingResult(session)
            }

            LoopState::RecordingResult(user) => {
                writeln!(output, "\n{}", report::render_user_results(&user))
                    .map_err(|e| e.to_string())?;
                board.record(user);
                LoopState::AwaitingContinue
            }

            LoopState::AwaitingContinue => {
                let again = prompt::prompt_yes_no(
                    input,
                    output,
                    "Would anyone else like to take the quiz? (yes/no): ",
                )
                .map_err(|e| e.to_string())?;
                if again {
                    LoopState::AwaitingUser
                } else {
                    LoopState::Finalizing
                }
            }

            LoopState::Finalizing => {
                if !board.is_empty() {
                    writeln!(output, "\n{}", report::render_final_results(&board))
                        .map_err(|e| e.to_string())?;
                }
                return Ok(board);
            }
        };
    }
}

/// One user's pass: present each question, collect a validated letter,
/// give immediate feedback.
fn run_session<R: BufRead, W: Write>(
    user: User,
    questions: Vec<Question>,
    input: &mut R,
    output: &mut W,
) -> Result<User, String> {
    let mut session = Session::new(user, questions);

    while let Some(question) = session.current().cloned() {
        writeln!(output, "\nQuestion {}: {}", session.number(), question.text)
            .map_err(|e| e.to_string())?;
        for choice in question.labeled_choices() {
            writeln!(output, "{choice}").map_err(|e| e.to_string())?;
        }

        let letter = prompt::prompt_answer(input, output).map_err(|e| e.to_string())?;
        let feedback = session.submit(letter).map_err(|e| e.to_string())?;

        if feedback.correct {
            writeln!(output, "{}", "Correct!".green().bold()).map_err(|e| e.to_string())?;
        } else {
            let message = format!(
                "Incorrect. The correct answer was: {}) {}",
                feedback.answer, feedback.correct_choice
            );
            writeln!(output, "{}", message.red()).map_err(|e| e.to_string())?;
        }
    }

    session.finish().map_err(|e| e.to_string())
}
