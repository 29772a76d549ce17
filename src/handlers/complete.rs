//! Complete handler for the task tracker

use crate::TrackerApp;
use crate::formatting;
use anyhow::{Result, bail};
use tracing::info;

impl TrackerApp {
    /// **Mark Task as Completed, step 1**: Sort pending tasks and number them for selection.
    ///
    /// # Returns
    /// The numbered list, or `None` when there is nothing to complete
    pub fn handle_pending_selection(&mut self) -> Option<String> {
        if self.tasks.is_empty() {
            return None;
        }
        self.tasks.sort_by_due_date();
        Some(formatting::format_numbered(
            self.tasks.active_tasks().map(|(_, task)| task),
            self.date_style(),
        ))
    }

    /// **Mark Task as Completed, step 2**: Complete the task shown under `ordinal`.
    ///
    /// Looks the task up among pending tasks, records it in the completed
    /// queue (which raises its completion flag) and then takes it out of the
    /// pending list. An urgent stack entry for the task is left in place.
    ///
    /// # Arguments
    /// * `ordinal` - 1-based number from the list rendered by `handle_pending_selection`
    pub fn handle_complete(&mut self, ordinal: usize) -> Result<String> {
        let Some(id) = self.tasks.active_task_by_ordinal(ordinal) else {
            bail!("Invalid task number or task already completed.");
        };

        if self.completed.enqueue(&mut self.tasks, id).is_none() {
            bail!("Invalid task number or task already completed.");
        }
        self.tasks.remove_task(id);

        info!(task = %id, ordinal, "task marked as completed");
        Ok("Task marked as completed.".to_string())
    }
}
