//! List the question bank.

use comfy_table::{ContentArrangement, Table};

use ek_core::QuestionBank;

/// Print the bank as a table; `answers` adds the correct-letter column.
pub fn run(answers: bool) -> Result<(), String> {
    let bank = QuestionBank::load().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["#", "Question", "A", "B", "C", "D"];
    if answers {
        header.push("Answer");
    }
    table.set_header(header);

    for (i, question) in bank.questions().iter().enumerate() {
        let mut row = vec![(i + 1).to_string(), question.text.clone()];
        row.extend(question.choices.iter().cloned());
        if answers {
            row.push(question.answer.to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} questions", bank.len());

    Ok(())
}
