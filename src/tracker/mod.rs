//! Task tracking domain model
//!
//! This module contains the task records and the ordered structures built on them.
//! It is split into submodules:
//! - `task`: Task record, due date, category and task id
//! - `sequence`: Arena-backed doubly-linked sequence shared by every view
//! - `task_collection`: Owner of all task records and the pending list
//! - `completed_queue`: FIFO of completed tasks
//! - `urgent_stack`: LIFO of urgent tasks

mod completed_queue;
mod sequence;
mod task;
mod task_collection;
mod urgent_stack;

// Re-export all public types
pub use completed_queue::CompletedQueue;
pub use sequence::{Iter, OrderedSequence, Position};
pub use task::{Category, DueDate, Task, TaskId};
pub use task_collection::TaskCollection;
pub use urgent_stack::UrgentStack;
