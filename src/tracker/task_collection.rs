use crate::tracker::sequence::OrderedSequence;
use crate::tracker::task::{Category, Task, TaskId};
use tracing::{debug, warn};

/// Owner of every task record and of the list of pending tasks
pub struct TaskCollection {
    /// All task records created in this session, indexed by `TaskId`
    ///
    /// Records are never removed from this table. Completing a task only
    /// unlinks its id from `active`; the completed queue and the urgent stack
    /// keep resolving the id here.
    pub(crate) records: Vec<Task>,

    /// Canonical list of tasks that have not been taken out by completion
    pub(crate) active: OrderedSequence<TaskId>,
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            active: OrderedSequence::new(),
        }
    }
}

impl TaskCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a new task and append it to the pending list
    ///
    /// # Returns
    /// The id under which the record can be looked up for the rest of the session
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.records.len());
        debug!(task = %id, name = %task.name, due = %task.due, "adding task");
        self.records.push(task);
        self.active.append_end(id);
        id
    }

    /// Look up a task record by id
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.records.get(id.0)
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.records.get_mut(id.0)
    }

    /// Find the n-th pending task, counting from 1 and skipping completed ones
    ///
    /// # Arguments
    /// * `ordinal` - 1-based position among non-completed tasks in list order
    ///
    /// # Returns
    /// The task id, or `None` when the ordinal is 0 or past the last pending task
    pub fn active_task_by_ordinal(&self, ordinal: usize) -> Option<TaskId> {
        if ordinal == 0 {
            return None;
        }
        self.active_tasks().nth(ordinal - 1).map(|(id, _)| id)
    }

    /// Non-completed tasks in list order
    pub fn active_tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> + '_ {
        self.active.iter().filter_map(move |id| {
            self.task(*id)
                .filter(|task| !task.is_completed())
                .map(|task| (*id, task))
        })
    }

    /// Number of non-completed tasks in the pending list
    pub fn active_count(&self) -> usize {
        self.active_tasks().count()
    }

    /// Reorder the pending list by due date, keeping ties in their current order
    pub fn sort_by_due_date(&mut self) {
        let records = &self.records;
        self.active.sort_by(|a, b| {
            let a = records.get(a.0).map(|task| task.due);
            let b = records.get(b.0).map(|task| task.due);
            a.cmp(&b)
        });
        debug!(count = self.active.len(), "sorted tasks by due date");
    }

    /// Non-completed tasks of one category, in list order
    ///
    /// Each call starts a fresh traversal.
    pub fn tasks_in_category(&self, category: Category) -> impl Iterator<Item = &Task> + '_ {
        self.active_tasks()
            .map(|(_, task)| task)
            .filter(move |task| task.category == category)
    }

    /// Take a task out of the pending list
    ///
    /// The record itself stays available through [`TaskCollection::task`].
    ///
    /// # Returns
    /// `Some(())` if the task was linked into the pending list, `None` otherwise
    pub fn remove_task(&mut self, id: TaskId) -> Option<()> {
        let Some(position) = self.active.find_position(&id) else {
            warn!(task = %id, "task not found in pending list");
            return None;
        };
        self.active.remove_at(position)?;
        debug!(task = %id, "removed task from pending list");
        Some(())
    }

    /// True when the pending list holds no tasks at all
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
