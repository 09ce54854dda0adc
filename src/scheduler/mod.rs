//! CPU scheduling simulations and metric evaluation.
//!
//! Provides the four classical disciplines as implementations of one
//! [`Scheduler`] trait, plus the metrics that turn a simulated timeline
//! into per-process and batch-level figures.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `Fcfs` | no | earliest arrival |
//! | `Sjf` | yes | shortest remaining time |
//! | `PrioritySjf` | yes | lowest priority number, then shortest remaining |
//! | `RoundRobin` | yes | FIFO queue, fixed quantum |
//!
//! Every run owns its own state; schedulers are freely reusable and the
//! input process table is never modified.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod preemptive;
mod round_robin;

pub use fcfs::Fcfs;
pub use metrics::MetricsAccumulator;
pub use preemptive::{PrioritySjf, Sjf};
pub use round_robin::RoundRobin;

use std::fmt::Debug;

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, Quantum, ScheduleOutcome, Timeline};
use crate::validation::ensure_valid;

/// A CPU scheduling discipline.
///
/// Implementors provide the raw simulation; validation and metric
/// derivation are shared through [`Scheduler::schedule`].
pub trait Scheduler: Debug {
    /// Discipline identifier stored in the outcome.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the batch and returns the execution timeline.
    ///
    /// Expects a validated process table (see
    /// [`validate_processes`](crate::validation::validate_processes)).
    /// Processes with no burst are treated as already complete.
    fn simulate(&self, processes: &[Process]) -> Timeline;

    /// Validates, simulates, and computes metrics.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
        ensure_valid(processes)?;

        let algorithm = self.algorithm();
        debug!(
            %algorithm,
            preemptive = algorithm.is_preemptive(),
            processes = processes.len(),
            "simulation started"
        );

        let timeline = self.simulate(processes);
        let outcome = MetricsAccumulator::new(processes).finish(algorithm, timeline)?;

        debug!(
            %algorithm,
            intervals = outcome.timeline.len(),
            makespan = outcome.summary.makespan,
            average_wait = outcome.summary.average_wait,
            average_turnaround = outcome.summary.average_turnaround,
            throughput = outcome.summary.throughput,
            "simulation finished"
        );
        Ok(outcome)
    }
}

/// Returns the scheduler implementing `algorithm`.
pub fn scheduler_for(algorithm: Algorithm) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs::new()),
        Algorithm::Sjf => Box::new(Sjf::new()),
        Algorithm::PrioritySjf => Box::new(PrioritySjf::new()),
        Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
    }
}

/// Runs one discipline over the batch.
pub fn run(algorithm: Algorithm, processes: &[Process]) -> Result<ScheduleOutcome, ScheduleError> {
    scheduler_for(algorithm).schedule(processes)
}

/// Runs all four disciplines independently, in report order.
pub fn run_all(
    processes: &[Process],
    quantum: Quantum,
) -> Result<Vec<ScheduleOutcome>, ScheduleError> {
    Algorithm::all(quantum)
        .into_iter()
        .map(|algorithm| run(algorithm, processes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5).with_priority(2),
            Process::new(2, 9).with_arrival(3).with_priority(1),
            Process::new(3, 6).with_arrival(6).with_priority(3),
        ]
    }

    #[test]
    fn test_run_all_order() {
        let outcomes = run_all(&sample(), Quantum::DEFAULT).unwrap();
        let algorithms: Vec<_> = outcomes.iter().map(|o| o.algorithm).collect();
        assert_eq!(algorithms, Algorithm::all(Quantum::DEFAULT).to_vec());
    }

    #[test]
    fn test_run_all_leaves_input_untouched() {
        let processes = sample();
        let before = processes.clone();
        run_all(&processes, Quantum::DEFAULT).unwrap();
        assert_eq!(processes, before);
    }

    #[test]
    fn test_single_process_identical_across_disciplines() {
        let processes = vec![Process::new(1, 5).with_priority(3)];
        for outcome in run_all(&processes, Quantum::DEFAULT).unwrap() {
            let r = outcome.results[0];
            assert_eq!(r.wait, 0, "{}", outcome.algorithm);
            assert_eq!(r.turnaround, 5, "{}", outcome.algorithm);
            assert_eq!(r.completion, 5, "{}", outcome.algorithm);
            assert_eq!(outcome.timeline.coalesced().len(), 1);
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        let processes = vec![Process::new(1, 0)];
        let err = run(Algorithm::Sjf, &processes).unwrap_err();
        match err {
            ScheduleError::Invalid(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_terminates_on_zero_burst() {
        // Unvalidated input must not spin: a zero burst counts as done.
        let processes = vec![Process::new(1, 0), Process::new(2, 2)];
        for algorithm in Algorithm::all(Quantum::DEFAULT) {
            let timeline = scheduler_for(algorithm).simulate(&processes);
            assert_eq!(timeline.busy_time(), 2);
        }
    }

    #[test]
    fn test_simulate_negative_burst_never_rewinds_clock() {
        let processes = vec![
            Process::new(1, 5),
            Process::new(2, -10).with_arrival(1),
            Process::new(3, 3).with_arrival(2),
        ];
        for algorithm in Algorithm::all(Quantum::DEFAULT) {
            let timeline = scheduler_for(algorithm).simulate(&processes);
            for pair in timeline.intervals().windows(2) {
                assert!(pair[0].stop <= pair[1].start, "{algorithm}: {pair:?}");
            }
            assert_eq!(timeline.service_time(2), 0, "{algorithm}");
            assert_eq!(timeline.busy_time(), 8, "{algorithm}");
            assert_eq!(timeline.makespan(), 8, "{algorithm}");
        }
    }

    #[test]
    fn test_time_overflow_rejected_before_simulation() {
        let processes = vec![Process::new(1, 5).with_arrival(i64::MAX - 2)];
        for algorithm in Algorithm::all(Quantum::DEFAULT) {
            match run(algorithm, &processes) {
                Err(ScheduleError::Invalid(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow)
                }
                other => panic!("{algorithm}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_batch_ending_at_clock_limit() {
        let half = i64::MAX / 2;
        let processes = vec![Process::new(1, half), Process::new(2, half)];
        for outcome in run_all(&processes, Quantum::UNBOUNDED).unwrap() {
            assert_eq!(outcome.summary.makespan, 2 * half, "{}", outcome.algorithm);
            let expected = (half as f64 + (2 * half) as f64) / 2.0;
            assert!(
                (outcome.summary.average_turnaround / expected - 1.0).abs() < 1e-10,
                "{}",
                outcome.algorithm
            );
        }
    }

    #[test]
    fn test_empty_batch() {
        for outcome in run_all(&[], Quantum::DEFAULT).unwrap() {
            assert!(outcome.timeline.is_empty());
            assert!(outcome.results.is_empty());
            assert!((outcome.summary.throughput - 0.0).abs() < 1e-10);
        }
    }
}
