use crate::tracker::sequence::OrderedSequence;
use crate::tracker::task::{Task, TaskId};
use crate::tracker::task_collection::TaskCollection;
use tracing::{debug, warn};

/// First-in, first-out record of completed tasks
#[derive(Default)]
pub struct CompletedQueue {
    queue: OrderedSequence<TaskId>,
}

impl CompletedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a task completed and record it at the back of the queue
    ///
    /// This is the only way a task's completion flag is raised. Each task is
    /// expected to be enqueued at most once.
    ///
    /// # Returns
    /// `Some(())` if the task exists, `None` if the id is unknown (nothing is recorded)
    pub fn enqueue(&mut self, tasks: &mut TaskCollection, id: TaskId) -> Option<()> {
        let Some(task) = tasks.task_mut(id) else {
            warn!(task = %id, "cannot complete unknown task");
            return None;
        };
        task.mark_completed();
        self.queue.append_end(id);
        debug!(task = %id, "task completed");
        Some(())
    }

    /// Take the oldest completed task off the queue
    pub fn dequeue(&mut self) -> Option<TaskId> {
        self.queue.remove_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Completed tasks, oldest completion first
    pub fn iter<'a>(&'a self, tasks: &'a TaskCollection) -> impl Iterator<Item = &'a Task> + 'a {
        self.queue.iter().filter_map(move |id| tasks.task(*id))
    }
}
