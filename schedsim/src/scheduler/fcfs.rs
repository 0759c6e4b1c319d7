//! First-Come-First-Served scheduling.
//!
//! Tasks run to completion strictly in arrival (table) order with no
//! preemption, so the queue is drained in a single pass under a
//! monotonically increasing clock.

use log::debug;

use super::check_tasks;
use crate::error::SchedError;
use crate::queue::LinearQueue;
use crate::task::Task;

/// Run every task to completion in arrival order.
///
/// For each task in turn: its waiting time is the clock value when it
/// reaches the front, and its turnaround time is the clock value after
/// its full execution time has been charged. No task is revisited.
pub fn run(tasks: &mut [Task]) -> Result<(), SchedError> {
    check_tasks(tasks)?;
    let mut queue = LinearQueue::build(tasks.len())?;

    let mut clock: u64 = 0;
    while let Some(index) = queue.peek_front() {
        let task = &mut tasks[index];
        task.waiting_time = clock;
        clock += task.execution_time;
        task.turnaround_time = clock;
        debug!(
            "fcfs: task {} ran for {} (wait {}, turnaround {})",
            task.id, task.execution_time, task.waiting_time, task.turnaround_time
        );
        queue.pop_front();
    }
    // Queue (sentinel included) is dropped here on every exit path.
    Ok(())
}
