//! CPU scheduling simulator.
//!
//! Simulates process scheduling for pedagogical analysis: given a set
//! of tasks with known execution times, computes each task's waiting
//! and turnaround time under First-Come-First-Served and round-robin
//! with a fixed time quantum. All "execution" is a logical accounting
//! of integer time units; there is no wall-clock timing and no
//! preemption beyond quantum expiry.
//!
//! Typical use:
//!
//! ```
//! let mut tasks = schedsim::initialize(&[3, 2, 4]);
//! schedsim::run_round_robin(&mut tasks, 2).unwrap();
//! let report = schedsim::Report::new(&tasks);
//! assert_eq!(report.tasks[1].waiting_time, 2);
//! ```

pub mod error;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod task;

pub use error::SchedError;
pub use report::{average_turnaround_time, average_waiting_time, Report};
pub use task::{initialize, Task, TaskId};

/// Run the First-Come-First-Served discipline over `tasks` in place.
pub fn run_fcfs(tasks: &mut [Task]) -> Result<(), SchedError> {
    scheduler::fcfs::run(tasks)
}

/// Run the round-robin discipline over `tasks` in place.
///
/// `quantum` must be at least 1.
pub fn run_round_robin(tasks: &mut [Task], quantum: u64) -> Result<(), SchedError> {
    scheduler::round_robin::run(tasks, quantum)
}
