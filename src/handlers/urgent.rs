//! Urgent list handler for the task tracker

use crate::TrackerApp;
use crate::formatting;

impl TrackerApp {
    /// **Show Urgent Tasks**: Push order, hiding urgent tasks completed since they were pushed.
    pub fn handle_list_urgent(&self) -> String {
        formatting::format_section(
            "Urgent tasks:",
            self.urgent.displayed(&self.tasks),
            "No urgent tasks.",
            self.date_style(),
        )
    }
}
