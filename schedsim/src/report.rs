//! Statistics over a finished task table.
//!
//! Pure read-only functions: by the time a reporter sees the tasks,
//! the scheduler has returned and given up its exclusive borrow.

use std::fmt;

use serde::Serialize;

use crate::task::Task;

/// Mean waiting time across the table, as a real value.
///
/// Returns 0.0 for an empty table rather than dividing by zero.
pub fn average_waiting_time(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let total: u64 = tasks.iter().map(|t| t.waiting_time).sum();
    total as f64 / tasks.len() as f64
}

/// Mean turnaround time across the table, as a real value.
pub fn average_turnaround_time(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let total: u64 = tasks.iter().map(|t| t.turnaround_time).sum();
    total as f64 / tasks.len() as f64
}

/// Per-task results plus averages, ready for emission.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The finished task table, in id order.
    pub tasks: Vec<Task>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl Report {
    /// Snapshot a finished task table.
    pub fn new(tasks: &[Task]) -> Self {
        Report {
            tasks: tasks.to_vec(),
            average_waiting_time: average_waiting_time(tasks),
            average_turnaround_time: average_turnaround_time(tasks),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for task in &self.tasks {
            writeln!(f, "Task[{}] Wait Time: {}", task.id, task.waiting_time)?;
            writeln!(
                f,
                "Task[{}] Turnaround Time: {}",
                task.id, task.turnaround_time
            )?;
        }
        writeln!(f, "Average Wait Time: {:.2}", self.average_waiting_time)?;
        write!(
            f,
            "Average Turnaround Time: {:.2}",
            self.average_turnaround_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::fcfs;
    use crate::task::initialize;

    #[test]
    fn averages_over_finished_fcfs_run() {
        let mut tasks = initialize(&[1, 2, 3]);
        fcfs::run(&mut tasks).unwrap();

        // waits [0, 1, 3], turnarounds [1, 3, 6]
        assert_eq!(average_waiting_time(&tasks), 4.0 / 3.0);
        assert_eq!(average_turnaround_time(&tasks), 10.0 / 3.0);
    }

    #[test]
    fn averages_of_empty_table_are_zero() {
        assert_eq!(average_waiting_time(&[]), 0.0);
        assert_eq!(average_turnaround_time(&[]), 0.0);
    }

    #[test]
    fn report_display_lists_every_task() {
        let mut tasks = initialize(&[1, 2]);
        fcfs::run(&mut tasks).unwrap();

        let rendered = Report::new(&tasks).to_string();
        assert!(rendered.contains("Task[0] Wait Time: 0"));
        assert!(rendered.contains("Task[1] Turnaround Time: 3"));
        assert!(rendered.contains("Average Wait Time: 0.50"));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut tasks = initialize(&[2]);
        fcfs::run(&mut tasks).unwrap();

        let report = Report::new(&tasks);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tasks"][0]["turnaround_time"], 2);
        assert_eq!(json["average_waiting_time"], 0.0);
    }
}
