//! Task definition and table construction.
//!
//! A task is the unit of work both schedulers operate on. Tasks carry
//! their timing accounting inline; schedulers mutate those fields in
//! place and the reporter reads them back once scheduling is done.

use serde::Serialize;

/// Unique task identifier, assigned by creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Create a TaskId from a raw value.
    pub fn new(id: u32) -> Self {
        TaskId(id)
    }
}

impl core::fmt::Display for TaskId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One schedulable task and its timing accounting.
///
/// `execution_time` is fixed at creation; the remaining fields are
/// written exclusively by whichever scheduler currently holds the task
/// table. After a scheduling run, `turnaround_time - waiting_time ==
/// execution_time` holds for every task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Identifier, equal to the task's index in the table.
    pub id: TaskId,
    /// Total time units this task needs to complete.
    pub execution_time: u64,
    /// Time units still needed. Starts at `execution_time`; reaches
    /// exactly 0 when the task completes under round-robin.
    pub remaining_time: u64,
    /// Time spent ready but not running before final completion.
    pub waiting_time: u64,
    /// Clock value at the moment the task last finishes running.
    pub turnaround_time: u64,
}

impl Task {
    /// Create a fresh task with all accounting fields at their
    /// pre-scheduling values.
    pub fn new(id: TaskId, execution_time: u64) -> Self {
        Task {
            id,
            execution_time,
            remaining_time: execution_time,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// True once the task has no work left.
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }
}

/// Build a task table from an ordered list of execution times.
///
/// Task ids are the input indices (`0..N-1`); timing fields start
/// zeroed with `remaining_time = execution_time`.
pub fn initialize(execution_times: &[u64]) -> Vec<Task> {
    execution_times
        .iter()
        .enumerate()
        .map(|(i, &time)| Task::new(TaskId(i as u32), time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_assigns_ids_in_order() {
        let tasks = initialize(&[3, 2, 4]);
        assert_eq!(tasks.len(), 3);
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.id, TaskId(i as u32));
        }
    }

    #[test]
    fn initialize_zeroes_accounting_fields() {
        let tasks = initialize(&[5, 0]);
        for task in &tasks {
            assert_eq!(task.remaining_time, task.execution_time);
            assert_eq!(task.waiting_time, 0);
            assert_eq!(task.turnaround_time, 0);
        }
    }

    #[test]
    fn initialize_empty_input_yields_empty_table() {
        assert!(initialize(&[]).is_empty());
    }

    #[test]
    fn zero_execution_task_starts_complete() {
        let task = Task::new(TaskId(0), 0);
        assert!(task.is_complete());
    }
}
