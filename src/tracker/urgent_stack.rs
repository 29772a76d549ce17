use crate::tracker::sequence::OrderedSequence;
use crate::tracker::task::{Task, TaskId};
use crate::tracker::task_collection::TaskCollection;
use tracing::debug;

/// Last-in, first-out record of urgent tasks
///
/// Entries are not withdrawn when their task is completed later on. They stay
/// on the stack (and can still be popped) but [`UrgentStack::displayed`] hides them.
#[derive(Default)]
pub struct UrgentStack {
    stack: OrderedSequence<TaskId>,
}

impl UrgentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a task if it is urgent and not yet completed
    ///
    /// # Returns
    /// `true` if the task was pushed; any other task is silently ignored
    pub fn push(&mut self, tasks: &TaskCollection, id: TaskId) -> bool {
        match tasks.task(id) {
            Some(task) if task.urgent && !task.is_completed() => {
                self.stack.append_end(id);
                debug!(task = %id, "pushed urgent task");
                true
            }
            _ => false,
        }
    }

    /// Take the most recently pushed task off the stack
    pub fn pop(&mut self) -> Option<TaskId> {
        self.stack.remove_back()
    }

    /// True when no entries are held, completed or not
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of entries held, including completed ones
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Urgent tasks in push order, skipping any that are completed by now
    pub fn displayed<'a>(
        &'a self,
        tasks: &'a TaskCollection,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.stack
            .iter()
            .filter_map(move |id| tasks.task(*id))
            .filter(|task| !task.is_completed())
    }
}
