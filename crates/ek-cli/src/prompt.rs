//! Validated console prompts.
//!
//! Every helper loops until the operator supplies valid input, printing a
//! specific message on each rejection. The quiz engine never sees invalid
//! input. Helpers are generic over the reader and writer so unit tests can
//! drive them with in-memory buffers.

use std::io::{BufRead, Write};

use ek_core::AnswerLetter;

/// Errors from the prompt layer. Validation failures are not errors — they
/// re-prompt. This covers the cases no retry can fix.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Stdin closed before valid input arrived.
    #[error("unexpected end of input")]
    Eof,

    /// The underlying read or write failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a trimmed name against the naming rules: ASCII letters, spaces,
/// and hyphens only, 2 to 50 characters.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name cannot be empty. Please enter your name.");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
    {
        return Err("Name should contain only letters, spaces, and hyphens.");
    }
    if !(2..=50).contains(&name.len()) {
        return Err("Name should be between 2 and 50 characters long.");
    }
    Ok(())
}

/// Prompt for the player's name until it passes [`validate_name`].
pub fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, PromptError> {
    loop {
        let name = read_trimmed(input, output, "Enter your name: ")?;
        match validate_name(&name) {
            Ok(()) => return Ok(name),
            Err(message) => writeln!(output, "{message}")?,
        }
    }
}

/// Prompt for how many questions to answer, `1..=bank_len`.
pub fn prompt_question_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    bank_len: usize,
) -> Result<usize, PromptError> {
    let prompt = format!(
        "This quiz has a total of {bank_len} questions. How many would you like to answer (1-{bank_len})? "
    );
    loop {
        let raw = read_trimmed(input, output, &prompt)?;
        if let Ok(n) = raw.parse::<usize>()
            && (1..=bank_len).contains(&n)
        {
            return Ok(n);
        }
        writeln!(
            output,
            "Invalid input. Please enter a number between 1 and {bank_len}."
        )?;
    }
}

/// Prompt for an answer letter, case-insensitive.
pub fn prompt_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<AnswerLetter, PromptError> {
    loop {
        let raw = read_trimmed(input, output, "Your answer (A/B/C/D): ")?;
        if let Some(letter) = AnswerLetter::parse(&raw) {
            return Ok(letter);
        }
        writeln!(output, "Invalid input. Please enter one of: A, B, C, D")?;
    }
}

/// Prompt a yes/no question, case-insensitive. Returns true for yes.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool, PromptError> {
    loop {
        let raw = read_trimmed(input, output, prompt)?;
        match raw.to_uppercase().as_str() {
            "YES" => return Ok(true),
            "NO" => return Ok(false),
            _ => writeln!(output, "Invalid input. Please enter one of: YES, NO")?,
        }
    }
}

/// Write the prompt, read one line, and return it trimmed. `Eof` when the
/// input is exhausted.
fn read_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }
    Ok(line.trim().to_string())
}
