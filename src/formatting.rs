//! Formatting helper functions for task listings
//!
//! This module turns task records into the text shown by the menu.

use crate::config::DateStyle;
use crate::tracker::{DueDate, Task};
use chrono::NaiveDate;

/// Render a due date in the configured style
pub fn format_due_date(due: &DueDate, style: DateStyle) -> String {
    match style {
        DateStyle::Dmy => due.to_string(),
        DateStyle::Iso => NaiveDate::from_ymd_opt(due.year, due.month, due.day)
            .map(|date| date.format("%Y-%m-%d").to_string())
            // Dates are validated on input, this only covers hand-built records
            .unwrap_or_else(|| format!("{:04}-{:02}-{:02}", due.year, due.month, due.day)),
    }
}

/// Render one task on a single line
pub fn format_task(task: &Task, style: DateStyle) -> String {
    format!(
        "Task: {}, Due: {}, Urgency: {}, Category: {}, Completed: {}",
        task.name,
        format_due_date(&task.due, style),
        if task.urgent { "Urgent" } else { "Normal" },
        task.category,
        if task.is_completed() { "Yes" } else { "No" }
    )
}

/// Render a titled block of tasks
///
/// # Arguments
/// * `header` - First line of the block
/// * `tasks` - Tasks to list, one per line
/// * `empty_message` - Line shown instead when `tasks` yields nothing
/// * `style` - Due date style
pub fn format_section<'a>(
    header: &str,
    tasks: impl IntoIterator<Item = &'a Task>,
    empty_message: &str,
    style: DateStyle,
) -> String {
    let mut result = format!("{}\n", header);
    let mut any = false;
    for task in tasks {
        result.push_str(&format_task(task, style));
        result.push('\n');
        any = true;
    }
    if !any {
        result.push_str(empty_message);
        result.push('\n');
    }
    result
}

/// Render tasks prefixed with 1-based selection numbers
pub fn format_numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>, style: DateStyle) -> String {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}\n", i + 1, format_task(task, style)))
        .collect()
}
