//! Schedule outcome (solution) model.
//!
//! An outcome bundles what one simulation produced: the execution
//! timeline, one timing row per process, and batch-level averages.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process, Timeline};

/// Timing metrics for one process.
///
/// Carries the input fields as well so a report row can be built from
/// the result alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process ID.
    pub id: i64,
    /// Input priority.
    pub priority: i64,
    /// Input burst.
    pub burst: i64,
    /// Input arrival.
    pub arrival: i64,
    /// Time spent ready but not running (never negative).
    pub wait: i64,
    /// Arrival to completion (`burst + wait`).
    pub turnaround: i64,
    /// Instant the remaining burst reached zero.
    pub completion: i64,
    /// Arrival to first dispatch.
    pub response: i64,
}

impl ProcessResult {
    /// Derives the metrics for `process` from its first dispatch and completion.
    ///
    /// Wait is clamped at zero: a process is never served before it is ready.
    pub fn new(process: &Process, first_start: i64, completion: i64) -> Self {
        let wait = (completion - process.arrival - process.burst).max(0);
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait,
            turnaround: process.burst + wait,
            completion,
            response: (first_start - process.arrival).max(0),
        }
    }
}

/// Aggregate metrics over the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Completed processes per tick: `count / makespan`.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Hand-overs between different processes.
    pub context_switches: usize,
}

/// Result of simulating one discipline over a process batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Discipline that produced this outcome.
    pub algorithm: Algorithm,
    /// CPU intervals in chronological order.
    pub timeline: Timeline,
    /// One row per process, in input order.
    pub results: Vec<ProcessResult>,
    /// Batch-level metrics.
    pub summary: ScheduleSummary,
}

impl ScheduleOutcome {
    /// Finds the result row for a process.
    pub fn result_for(&self, process_id: i64) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == process_id)
    }

    /// Wait times in input order.
    pub fn waits(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.wait).collect()
    }

    /// Completion times in input order.
    pub fn completions(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.completion).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_derivation() {
        let p = Process::new(2, 9).with_arrival(3).with_priority(1);
        let r = ProcessResult::new(&p, 5, 14);
        assert_eq!(r.wait, 2);
        assert_eq!(r.turnaround, 11);
        assert_eq!(r.completion, 14);
        assert_eq!(r.response, 2);
        assert_eq!(r.priority, 1);
    }

    #[test]
    fn test_wait_clamped_at_zero() {
        // Completion earlier than arrival + burst cannot happen in a valid
        // schedule, but the derived wait must still never go negative.
        let p = Process::new(1, 5);
        let r = ProcessResult::new(&p, 0, 4);
        assert_eq!(r.wait, 0);
        assert_eq!(r.turnaround, 5);
    }

    #[test]
    fn test_outcome_lookups() {
        let p1 = Process::new(1, 2);
        let p2 = Process::new(2, 3).with_arrival(1);
        let outcome = ScheduleOutcome {
            algorithm: Algorithm::Fcfs,
            timeline: Timeline::new(),
            results: vec![ProcessResult::new(&p1, 0, 2), ProcessResult::new(&p2, 2, 5)],
            summary: ScheduleSummary::default(),
        };
        assert_eq!(outcome.waits(), vec![0, 1]);
        assert_eq!(outcome.completions(), vec![2, 5]);
        assert_eq!(outcome.result_for(2).unwrap().turnaround, 4);
        assert!(outcome.result_for(9).is_none());
    }
}
