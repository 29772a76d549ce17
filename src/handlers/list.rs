//! List handlers for the task tracker

use crate::TrackerApp;
use crate::formatting;
use crate::tracker::Category;

impl TrackerApp {
    /// **Show All Tasks by Due Date**: Sorts the pending list in place, then renders it.
    pub fn handle_list_by_due_date(&mut self) -> String {
        self.tasks.sort_by_due_date();
        formatting::format_section(
            "Available tasks sorted by due date:",
            self.tasks.active_tasks().map(|(_, task)| task),
            "No available tasks to display.",
            self.date_style(),
        )
    }

    /// **Show Tasks by Category**: One block per category in menu order.
    pub fn handle_list_by_category(&self) -> String {
        Category::ALL
            .iter()
            .map(|category| {
                formatting::format_section(
                    &format!("Category: {}", category),
                    self.tasks.tasks_in_category(*category),
                    "No task in this category.",
                    self.date_style(),
                )
            })
            .collect()
    }
}
