use colored::Colorize;
use tasktrack::api::{CmdMessage, MessageLevel};
use tasktrack::model::{Status, Task};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["Id", "Description", "Status", "Created At", "Updated At"];
const COLUMN_GAP: &str = "  ";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Render tasks as an aligned table: Id, Description, Status, Created At,
/// Updated At. Widths follow the widest cell per column.
pub(crate) fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks to display.");
        return;
    }

    let rows: Vec<[&str; 5]> = tasks
        .iter()
        .map(|t| {
            [
                t.id.as_str(),
                t.description.as_str(),
                t.status.as_str(),
                t.created_at.as_str(),
                t.updated_at.as_str(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (w, header) in widths.iter_mut().zip(HEADERS) {
        *w = header.width();
    }
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let header_line = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_cell(h, w))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    println!("{}", header_line.bold());

    let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    println!("{}", "-".repeat(total));

    for (task, row) in tasks.iter().zip(&rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_cell(cell, w))
            .collect();
        println!(
            "{}{gap}{}{gap}{}{gap}{}{gap}{}",
            cells[0],
            cells[1],
            colorize_status(task.status, &cells[2]),
            cells[3].dimmed(),
            cells[4].dimmed(),
            gap = COLUMN_GAP
        );
    }
}

// Manual padding: format! pads by char count, which misaligns wide glyphs.
fn pad_cell(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn colorize_status(status: Status, cell: &str) -> colored::ColoredString {
    match status {
        Status::Todo => cell.yellow(),
        Status::InProgress => cell.cyan(),
        Status::Done => cell.green(),
    }
}
