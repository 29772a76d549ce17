//! Completed list handler for the task tracker

use crate::TrackerApp;
use crate::formatting;

impl TrackerApp {
    /// **Show Completed Tasks**: Oldest completion first.
    pub fn handle_list_completed(&self) -> String {
        formatting::format_section(
            "Completed tasks:",
            self.completed.iter(&self.tasks),
            "No completed tasks.",
            self.date_style(),
        )
    }
}
