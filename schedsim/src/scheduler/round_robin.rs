//! Round-robin scheduling with a fixed time quantum.
//!
//! Each task at the head of the circular queue is granted at most one
//! quantum of its remaining time, then re-enqueued at the tail if work
//! remains. The loop ends when every task's remaining time is zero.

use log::{debug, trace};

use super::{check_tasks, MIN_QUANTUM};
use crate::error::SchedError;
use crate::queue::CircularQueue;
use crate::task::{Task, TaskId};

/// Run every task to completion, one quantum-bounded grant at a time.
///
/// Waiting time is recomputed on a grant only when the task differs
/// from the one that ran in the previous grant; a task that runs in two
/// consecutive quanta (possible once it is the only one left) must not
/// have wait time double-credited. Turnaround time is set on every
/// grant, so the final grant's clock value persists as the completion
/// time.
pub fn run(tasks: &mut [Task], quantum: u64) -> Result<(), SchedError> {
    check_tasks(tasks)?;
    if quantum < MIN_QUANTUM {
        return Err(SchedError::InvalidQuantum(quantum));
    }
    let mut queue = CircularQueue::build(tasks.len())?;

    let mut clock: u64 = 0;
    let mut last_ran: Option<TaskId> = None;
    while let Some(index) = queue.peek_front() {
        let task = &mut tasks[index];

        let slice = task.remaining_time.min(quantum);
        task.remaining_time -= slice;
        clock += slice;

        if last_ran != Some(task.id) {
            // Elapsed clock minus the time this task has actually run
            // so far.
            task.waiting_time = clock - (task.execution_time - task.remaining_time);
        }
        task.turnaround_time = clock;
        last_ran = Some(task.id);
        trace!(
            "rr: task {} granted {} (remaining {}, clock {})",
            task.id,
            slice,
            task.remaining_time,
            clock
        );

        if task.remaining_time != 0 {
            // Re-append before popping so the in-progress task is never
            // absent from the queue.
            queue.push_back(index)?;
        }
        queue.pop_front();
    }
    debug!("rr: all tasks complete at clock {clock}");
    Ok(())
}
