use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a task record owned by a [`TaskCollection`](super::TaskCollection)
///
/// Ids are handed out in creation order and never reused, so comparing two
/// ids is an identity check on the underlying records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) usize);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// Fixed set of task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Work,
    Personal,
}

impl Category {
    /// Every category in menu order
    pub const ALL: [Category; 3] = [Category::Study, Category::Work, Category::Personal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Work => "work",
            Category::Personal => "personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "study" => Ok(Category::Study),
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: study, work, personal",
                s
            )),
        }
    }
}

/// Due date as entered by the user
///
/// Field order gives the derived ordering: year first, then month, then day.
/// Calendar validity is checked by the input layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DueDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DueDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// A single task record
///
/// Everything except the completion flag is fixed at creation. The flag can
/// only be raised by [`CompletedQueue::enqueue`](super::CompletedQueue::enqueue)
/// and is never lowered again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub due: DueDate,
    pub urgent: bool,
    pub category: Category,
    completed: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, due: DueDate, urgent: bool, category: Category) -> Self {
        Self {
            name: name.into(),
            due,
            urgent,
            category,
            completed: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
