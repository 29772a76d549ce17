//! Text menu driving a [`TrackerApp`]
//!
//! The menu reads whole lines from any `BufRead` and writes to any `Write`,
//! so the same loop serves the terminal and in-memory test input.

use crate::TrackerApp;
use crate::tracker::{Category, Task};
use crate::validation::{self, DAY_RANGE, MONTH_RANGE, YEAR_RANGE};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Options offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddTask,
    ShowByDueDate,
    MarkCompleted,
    ShowCompleted,
    ShowUrgent,
    ShowByCategory,
    Exit,
}

impl MenuOption {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuOption::AddTask),
            2 => Some(MenuOption::ShowByDueDate),
            3 => Some(MenuOption::MarkCompleted),
            4 => Some(MenuOption::ShowCompleted),
            5 => Some(MenuOption::ShowUrgent),
            6 => Some(MenuOption::ShowByCategory),
            7 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\nTask Management System\n\
1. Add Task\n\
2. Show All Tasks by Due Date\n\
3. Mark Task as Completed\n\
4. Show Completed Tasks\n\
5. Show Urgent Tasks\n\
6. Show Tasks by Category\n\
7. Exit\n";

/// Interactive session over one input and one output stream
pub struct Menu<R, W> {
    app: TrackerApp,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(app: TrackerApp, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    pub fn app(&self) -> &TrackerApp {
        &self.app
    }

    /// Finish the session and hand back the state and output stream
    pub fn into_parts(self) -> (TrackerApp, W) {
        (self.app, self.output)
    }

    /// Run until the user picks Exit or the input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU_TEXT)?;
            let Some(line) = self.prompt_line("Enter option: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let Some(number) = validation::parse_number(&line) else {
                writeln!(self.output, "Invalid input, please enter a number.")?;
                continue;
            };

            match MenuOption::from_number(number) {
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Exiting system.")?;
                    return Ok(());
                }
                Some(option) => {
                    if !self.dispatch(option)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    /// Run one menu option
    ///
    /// # Returns
    /// `false` if the input ended while the option was prompting
    fn dispatch(&mut self, option: MenuOption) -> Result<bool> {
        debug!(?option, "menu option selected");
        match option {
            MenuOption::AddTask => return self.add_task(),
            MenuOption::ShowByDueDate => {
                let text = self.app.handle_list_by_due_date();
                write!(self.output, "{}", text)?;
            }
            MenuOption::MarkCompleted => return self.mark_completed(),
            MenuOption::ShowCompleted => {
                let text = self.app.handle_list_completed();
                write!(self.output, "{}", text)?;
            }
            MenuOption::ShowUrgent => {
                let text = self.app.handle_list_urgent();
                write!(self.output, "{}", text)?;
            }
            MenuOption::ShowByCategory => {
                let text = self.app.handle_list_by_category();
                write!(self.output, "{}", text)?;
            }
            MenuOption::Exit => {}
        }
        Ok(true)
    }

    fn add_task(&mut self) -> Result<bool> {
        let Some(name) = self.prompt_line("Enter task name: ")? else {
            return Ok(false);
        };
        let Some(day) = self.prompt_in_range("Enter day (1-31): ", DAY_RANGE)? else {
            return Ok(false);
        };
        let Some(month) = self.prompt_in_range("Enter month (1-12): ", MONTH_RANGE)? else {
            return Ok(false);
        };
        let Some(year) = self.prompt_in_range("Enter year (1-9999): ", YEAR_RANGE)? else {
            return Ok(false);
        };

        // Range prompts bound every component well inside u32/i32
        let due = match validation::parse_due_date(day as u32, month as u32, year as i32) {
            Ok(due) => due,
            Err(e) => {
                debug!(error = %e, "rejected due date");
                writeln!(
                    self.output,
                    "Invalid date entered. Please try adding the task again."
                )?;
                return Ok(true);
            }
        };

        let Some(priority) =
            self.prompt_in_range("Select priority (1 for Urgent, 2 for Normal): ", (1, 2))?
        else {
            return Ok(false);
        };
        let Some(category) = self.prompt_in_range(
            "Select category (1 for Study, 2 for Work, 3 for Personal): ",
            (1, 3),
        )?
        else {
            return Ok(false);
        };
        let category = Category::ALL[(category - 1) as usize];

        let reply = self.app.handle_add(Task::new(name, due, priority == 1, category));
        writeln!(self.output, "{}", reply)?;
        Ok(true)
    }

    fn mark_completed(&mut self) -> Result<bool> {
        let Some(listing) = self.app.handle_pending_selection() else {
            writeln!(
                self.output,
                "Thanks for being productive for today. There is no task to complete."
            )?;
            return Ok(true);
        };

        let count = self.app.tasks().active_count() as i64;
        write!(self.output, "Select a task to mark as completed:\n{}", listing)?;

        let Some(ordinal) = self.prompt_in_range(
            "Enter the number of the task (starting from 1): ",
            (1, count),
        )?
        else {
            return Ok(false);
        };

        match self.app.handle_complete(ordinal as usize) {
            Ok(reply) => writeln!(self.output, "{}", reply)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    /// Print `message` and read one line without its line ending
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD; only I/O
    /// failures are errors.
    ///
    /// # Returns
    /// `None` once the input is exhausted
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush().context("Failed to flush output")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Keep prompting until a number inside `range` is entered
    fn prompt_in_range(&mut self, message: &str, range: (i64, i64)) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(message)? else {
                return Ok(None);
            };
            match validation::parse_number(&line) {
                Some(value) if validation::in_range(value, range.0, range.1) => {
                    return Ok(Some(value));
                }
                Some(_) => writeln!(self.output, "Input out of range. Please try again.")?,
                None => writeln!(self.output, "Invalid input, please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (TrackerApp, String) {
        let mut menu = Menu::new(
            TrackerApp::default(),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        menu.run().unwrap();
        let (app, output) = menu.into_parts();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_option_numbers() {
        assert_eq!(MenuOption::from_number(1), Some(MenuOption::AddTask));
        assert_eq!(MenuOption::from_number(7), Some(MenuOption::Exit));
        assert!(MenuOption::from_number(0).is_none());
        assert!(MenuOption::from_number(8).is_none());
    }

    #[test]
    fn test_exit() {
        let (_, output) = run("7\n");
        assert!(output.contains("Task Management System"));
        assert!(output.ends_with("Exiting system.\n"));
    }

    #[test]
    fn test_end_of_input_leaves_quietly() {
        let (app, output) = run("");
        assert!(app.tasks().is_empty());
        assert!(!output.contains("Exiting system."));
    }

    #[test]
    fn test_invalid_option_and_input() {
        let (_, output) = run("9\nabc\n7\n");
        assert!(output.contains("Invalid option. Please try again."));
        assert!(output.contains("Invalid input, please enter a number."));
    }

    #[test]
    fn test_add_task_reprompts_out_of_range() {
        let (app, output) = run("1\nGym\n32\n15\n3\n2025\n2\n3\n7\n");
        assert!(output.contains("Input out of range. Please try again."));
        assert!(output.contains("Task added successfully."));

        let id = app.tasks().active_task_by_ordinal(1).unwrap();
        let task = app.tasks().task(id).unwrap();
        assert_eq!(task.name, "Gym");
        assert_eq!(task.category, Category::Personal);
        assert!(!task.urgent);
    }

    #[test]
    fn test_add_task_rejects_impossible_date() {
        let (app, output) = run("1\nTaxes\n30\n2\n2025\n7\n");
        assert!(output.contains("Invalid date entered. Please try adding the task again."));
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_mark_completed_with_no_tasks() {
        let (_, output) = run("3\n7\n");
        assert!(output.contains(
            "Thanks for being productive for today. There is no task to complete."
        ));
    }
}
