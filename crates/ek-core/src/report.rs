//! Result rendering: per-user blocks, final standings, and exports.

use crate::error::{QuizError, QuizResult};
use crate::scoreboard::Scoreboard;
use crate::user::User;

/// Output format for exported standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    Json,
    /// A markdown table with summary lines.
    Markdown,
    /// Plain text, one line per user.
    Text,
}

impl ExportFormat {
    /// Parse a format name from user input.
    pub fn parse(s: &str) -> QuizResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            other => Err(QuizError::UnknownExportFormat(other.to_string())),
        }
    }
}

/// The results block shown right after a user's session ends.
pub fn render_user_results(user: &User) -> String {
    let mut out = format!("{}'s Results:\n", user.name);
    out.push_str(&format!("Score: {}/{}\n", user.score, user.answered()));
    out.push_str(&format!("Percentage: {:.2}%\n", user.percentage()));
    out.push_str(&format!("Correct Answers: {}\n", user.correct_total));
    out.push_str(&format!("Incorrect Answers: {}", user.incorrect_total));
    out
}

/// The final standings block: highest score (first user wins ties), each
/// user's line in insertion order, and the mean fractional score.
pub fn render_final_results(board: &Scoreboard) -> String {
    let mut out = String::from("Final Results:\n");

    if let Some(best) = board.highest() {
        out.push_str(&format!(
            "Highest score: {} - {}/{}\n",
            best.name,
            best.score,
            best.answered()
        ));
    }

    for user in board.users() {
        out.push_str(&format!(
            "{}: {}/{}\n",
            user.name,
            user.score,
            user.answered()
        ));
    }

    out.push_str(&format!("\nAverage score: {:.2}", board.average_fraction()));
    out
}

/// Render the standings in the given export format.
pub fn export(board: &Scoreboard, format: ExportFormat) -> QuizResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(board)?),
        ExportFormat::Markdown => Ok(export_markdown(board)),
        ExportFormat::Text => Ok(export_text(board)),
    }
}

fn export_markdown(board: &Scoreboard) -> String {
    let mut out = String::from("# Final Standings\n\n");
    out.push_str("| Player | Score | Percentage |\n");
    out.push_str("|--------|-------|------------|\n");
    for user in board.users() {
        out.push_str(&format!(
            "| {} | {}/{} | {:.2}% |\n",
            user.name,
            user.score,
            user.answered(),
            user.percentage()
        ));
    }
    if let Some(best) = board.highest() {
        out.push_str(&format!("\n**Highest score**: {}\n", best.name));
    }
    out.push_str(&format!(
        "**Average score**: {:.2}\n",
        board.average_fraction()
    ));
    out
}

fn export_text(board: &Scoreboard) -> String {
    let mut out = String::from("Final Standings\n");
    for user in board.users() {
        out.push_str(&format!(
            "  {}: {}/{} ({:.2}%)\n",
            user.name,
            user.score,
            user.answered(),
            user.percentage()
        ));
    }
    if let Some(best) = board.highest() {
        out.push_str(&format!("Highest score: {}\n", best.name));
    }
    out.push_str(&format!("Average score: {:.2}\n", board.average_fraction()));
    out
}
