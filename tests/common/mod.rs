//! Common test utilities for integration tests
#![allow(dead_code)]

use std::io::Cursor;
use task_tracker::{Category, Config, DueDate, Menu, Task, TrackerApp};

/// Create a task from a d/m/y date
pub fn create_test_task(
    name: &str,
    date: (u32, u32, i32),
    urgent: bool,
    category: Category,
) -> Task {
    Task::new(name, DueDate::new(date.0, date.1, date.2), urgent, category)
}

/// Run the menu over a scripted input and return the final state and output
pub fn run_menu(script: &str, config: Config) -> (TrackerApp, String) {
    run_menu_bytes(script.as_bytes(), config)
}

/// Same as `run_menu`, for input that is not necessarily UTF-8
pub fn run_menu_bytes(script: &[u8], config: Config) -> (TrackerApp, String) {
    let mut menu = Menu::new(TrackerApp::new(config), Cursor::new(script.to_vec()), Vec::new());
    menu.run().unwrap();
    let (app, output) = menu.into_parts();
    (app, String::from_utf8(output).unwrap())
}

/// Names of pending tasks in list order
pub fn active_names(app: &TrackerApp) -> Vec<String> {
    app.tasks()
        .active_tasks()
        .map(|(_, task)| task.name.clone())
        .collect()
}
