//! Scheduling disciplines.
//!
//! Each scheduler takes exclusive access to the task table for the
//! duration of one run, drives a queue built over it, and writes the
//! per-task waiting and turnaround times in place. Input validation
//! happens before any queue is built, so a rejected call leaves the
//! table untouched.

pub mod fcfs;
pub mod round_robin;

use crate::error::SchedError;
use crate::task::Task;

/// Smallest quantum round-robin accepts.
pub const MIN_QUANTUM: u64 = 1;

/// Reject an empty task table before any queue construction.
fn check_tasks(tasks: &[Task]) -> Result<(), SchedError> {
    if tasks.is_empty() {
        return Err(SchedError::EmptyTaskSet);
    }
    Ok(())
}
