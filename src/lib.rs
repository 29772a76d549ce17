//! Task Tracker Library
//!
//! This library provides a single-user, in-memory task tracker driven by a text
//! menu. Tasks carry a due date, an urgency flag and a category; they can be
//! listed by due date, by category, as urgent or as completed.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Menu Layer**: `Menu` - Prompts for input and dispatches menu options
//! - **Application Layer**: `TrackerApp` and the `handlers` module - One handler per menu action
//! - **Domain Layer**: `tracker` module - Task records and the ordered structures built on them
//!
//! Nothing is persisted: all state lives in one `TrackerApp` for the session.
//!
//! # Example
//!
//! ```
//! use task_tracker::{Category, Config, DueDate, Task, TrackerApp};
//!
//! let mut app = TrackerApp::new(Config::default());
//! app.handle_add(Task::new("Write report", DueDate::new(1, 1, 2025), true, Category::Work));
//! assert!(app.handle_list_urgent().contains("Write report"));
//! ```

pub mod config;
pub mod formatting;
mod handlers;
pub mod menu;
pub mod tracker;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, DateStyle};
pub use menu::Menu;
pub use tracker::{
    Category, CompletedQueue, DueDate, OrderedSequence, Position, Task, TaskCollection, TaskId,
    UrgentStack,
};

/// Application state for one tracker session
///
/// Holds the task collection together with the completed queue and urgent
/// stack that refer into it. The menu owns exactly one of these.
pub struct TrackerApp {
    pub(crate) tasks: TaskCollection,
    pub(crate) completed: CompletedQueue,
    pub(crate) urgent: UrgentStack,
    pub(crate) config: Config,
}

impl TrackerApp {
    /// Create an empty session
    ///
    /// # Arguments
    /// * `config` - Display settings used by every listing
    pub fn new(config: Config) -> Self {
        Self {
            tasks: TaskCollection::new(),
            completed: CompletedQueue::new(),
            urgent: UrgentStack::new(),
            config,
        }
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn completed(&self) -> &CompletedQueue {
        &self.completed
    }

    pub fn urgent(&self) -> &UrgentStack {
        &self.urgent
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn date_style(&self) -> DateStyle {
        self.config.display.date_style
    }
}

impl Default for TrackerApp {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
