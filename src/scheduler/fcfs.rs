//! First-come, first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable, so equal arrivals keep input order).
//! 2. Keep a running service time: the instant the CPU becomes free.
//! 3. Each process starts at `max(arrival, service time)` and runs to
//!    completion; no preemption ever occurs.
//!
//! Idle periods are implicit: an interval may start after the previous
//! one stopped.
//!
//! # Complexity
//! O(n log n) for the arrival ordering, O(n) for the simulation.

use tracing::trace;

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Algorithm, Process, Timeline};

/// Non-preemptive first-come, first-served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> Timeline {
        let order = RuleEngine::new()
            .with_rule(rules::Fifo)
            .sort_indices(processes, &SchedulingContext::new(processes));

        let mut timeline = Timeline::new();
        let mut service_time: i64 = 0;

        for index in order {
            let p = &processes[index];
            if p.burst <= 0 {
                // Nothing to run; the CPU-free instant must not move.
                continue;
            }
            let wait = (service_time - p.arrival).max(0);
            let start = p.arrival + wait;
            let completion = start + p.burst;

            if start > service_time {
                trace!(from = service_time, until = start, "cpu idle");
            }
            trace!(pid = p.id, start, completion, wait, "dispatch");

            timeline.push(p.id, start, completion);
            service_time = completion;
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5).with_priority(2),
            Process::new(2, 9).with_arrival(3).with_priority(1),
            Process::new(3, 6).with_arrival(6).with_priority(3),
        ]
    }

    #[test]
    fn test_fcfs_reference_batch() {
        let outcome = Fcfs.schedule(&sample()).unwrap();
        assert_eq!(outcome.completions(), vec![5, 14, 20]);
        assert_eq!(outcome.waits(), vec![0, 2, 8]);
        assert_eq!(
            outcome.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 5),
                ExecutionInterval::new(2, 5, 14),
                ExecutionInterval::new(3, 14, 20),
            ]
        );
        assert!((outcome.summary.throughput - 0.15).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(1, 2), Process::new(2, 3).with_arrival(5)];
        let outcome = Fcfs.schedule(&processes).unwrap();
        assert_eq!(
            outcome.timeline.intervals(),
            &[ExecutionInterval::new(1, 0, 2), ExecutionInterval::new(2, 5, 8)]
        );
        assert_eq!(outcome.waits(), vec![0, 0]);
    }

    #[test]
    fn test_fcfs_orders_by_arrival() {
        let processes = vec![
            Process::new(1, 2).with_arrival(4),
            Process::new(2, 3),
            Process::new(3, 1).with_arrival(4),
        ];
        let timeline = Fcfs.simulate(&processes);
        let order: Vec<_> = timeline.intervals().iter().map(|iv| iv.process_id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_fcfs_never_preempts() {
        let processes = vec![Process::new(1, 10), Process::new(2, 1).with_arrival(1)];
        let timeline = Fcfs.simulate(&processes);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.intervals()[0], ExecutionInterval::new(1, 0, 10));
    }

    #[test]
    fn test_fcfs_skips_non_positive_bursts() {
        let processes = vec![
            Process::new(1, 5),
            Process::new(2, -10).with_arrival(1),
            Process::new(3, 0).with_arrival(8),
            Process::new(4, 3).with_arrival(2),
        ];
        let timeline = Fcfs.simulate(&processes);
        assert_eq!(
            timeline.intervals(),
            &[ExecutionInterval::new(1, 0, 5), ExecutionInterval::new(4, 5, 8)]
        );
    }

    #[test]
    fn test_fcfs_empty() {
        let outcome = Fcfs.schedule(&[]).unwrap();
        assert!(outcome.timeline.is_empty());
        assert!((outcome.summary.average_wait - 0.0).abs() < 1e-10);
    }
}
