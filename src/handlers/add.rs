//! Add handler for the task tracker

use crate::TrackerApp;
use crate::tracker::Task;
use tracing::info;

impl TrackerApp {
    /// **Add Task**: Store a new task and, when it is urgent, record it on the urgent stack.
    pub fn handle_add(&mut self, task: Task) -> String {
        let id = self.tasks.add_task(task);
        let pushed = self.urgent.push(&self.tasks, id);
        info!(task = %id, urgent = pushed, "task added");
        "Task added successfully.".to_string()
    }
}
