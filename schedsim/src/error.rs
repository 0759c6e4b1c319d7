//! Error types for queue construction and scheduling.

use crate::task::TaskId;

/// All errors produced by the simulator library.
///
/// Input errors are detected before any queue is built, so a failed
/// scheduling call never leaves partially updated timing fields behind.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedError {
    /// A queue or scheduler was offered zero tasks.
    #[error("cannot schedule an empty task set")]
    EmptyTaskSet,

    /// Round-robin was asked to run with a quantum below 1.
    #[error("round-robin quantum must be at least 1, got {0}")]
    InvalidQuantum(u64),

    /// A task index outside the table was pushed onto a queue.
    #[error("task {id} is not part of this queue's task table")]
    UnknownTask { id: TaskId },
}
