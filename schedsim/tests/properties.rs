//! Cross-cutting properties of both scheduling disciplines.

use proptest::collection::vec;
use proptest::prelude::*;

use schedsim::{initialize, run_fcfs, run_round_robin};

fn execution_times() -> impl Strategy<Value = Vec<u64>> {
    vec(0u64..64, 1..24)
}

proptest! {
    #[test]
    fn fcfs_turnaround_minus_wait_is_execution(times in execution_times()) {
        let mut tasks = initialize(&times);
        run_fcfs(&mut tasks).unwrap();

        for task in &tasks {
            prop_assert_eq!(
                task.turnaround_time - task.waiting_time,
                task.execution_time
            );
        }
    }

    #[test]
    fn fcfs_turnaround_is_nondecreasing(times in execution_times()) {
        let mut tasks = initialize(&times);
        run_fcfs(&mut tasks).unwrap();

        for pair in tasks.windows(2) {
            prop_assert!(pair[0].turnaround_time <= pair[1].turnaround_time);
        }
    }

    #[test]
    fn fcfs_is_deterministic(times in execution_times()) {
        let mut first = initialize(&times);
        let mut second = initialize(&times);
        run_fcfs(&mut first).unwrap();
        run_fcfs(&mut second).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn round_robin_conserves_total_execution(
        times in execution_times(),
        quantum in 1u64..10,
    ) {
        let mut tasks = initialize(&times);
        run_round_robin(&mut tasks, quantum).unwrap();

        let total: u64 = tasks.iter().map(|t| t.execution_time).sum();
        let final_clock = tasks.iter().map(|t| t.turnaround_time).max().unwrap();
        prop_assert_eq!(total, final_clock);
    }

    #[test]
    fn round_robin_completes_every_task(
        times in execution_times(),
        quantum in 1u64..10,
    ) {
        let mut tasks = initialize(&times);
        run_round_robin(&mut tasks, quantum).unwrap();

        for task in &tasks {
            prop_assert_eq!(task.remaining_time, 0);
            prop_assert_eq!(
                task.turnaround_time - task.waiting_time,
                task.execution_time
            );
        }
    }

    #[test]
    fn round_robin_with_oversized_quantum_matches_fcfs(times in execution_times()) {
        let quantum = times.iter().copied().max().unwrap_or(0).max(1);
        let mut rr = initialize(&times);
        let mut fcfs = initialize(&times);
        run_round_robin(&mut rr, quantum).unwrap();
        run_fcfs(&mut fcfs).unwrap();

        for (a, b) in rr.iter().zip(&fcfs) {
            prop_assert_eq!(a.waiting_time, b.waiting_time);
            prop_assert_eq!(a.turnaround_time, b.turnaround_time);
        }
    }

    #[test]
    fn task_ids_survive_scheduling_unchanged(
        times in execution_times(),
        quantum in 1u64..10,
    ) {
        let mut tasks = initialize(&times);
        run_round_robin(&mut tasks, quantum).unwrap();

        for (i, task) in tasks.iter().enumerate() {
            prop_assert_eq!(task.id, schedsim::TaskId(i as u32));
        }
    }
}
