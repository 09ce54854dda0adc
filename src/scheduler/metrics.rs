//! Schedule timing metrics.
//!
//! Derives per-process and batch-level metrics from a completed timeline
//! and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Last stop of the process on the CPU |
//! | Wait | max(0, completion - arrival - burst) |
//! | Turnaround | burst + wait |
//! | Response | first start - arrival |
//! | Throughput | process count / latest completion |
//! | CPU utilization | busy ticks / latest completion |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ProcessResult, ScheduleOutcome, ScheduleSummary, Timeline};

/// Turns a finished timeline into a [`ScheduleOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsAccumulator<'a> {
    processes: &'a [Process],
}

impl<'a> MetricsAccumulator<'a> {
    /// Creates an accumulator over the input processes.
    pub fn new(processes: &'a [Process]) -> Self {
        Self { processes }
    }

    /// Computes one result row per process, in input order.
    ///
    /// Fails with [`ScheduleError::Unfinished`] when the timeline did not
    /// give some process its full burst.
    pub fn results(&self, timeline: &Timeline) -> Result<Vec<ProcessResult>, ScheduleError> {
        self.processes
            .iter()
            .map(|p| {
                let unfinished = ScheduleError::Unfinished { process_id: p.id };
                if timeline.service_time(p.id) != p.burst {
                    return Err(unfinished);
                }
                match (timeline.first_start(p.id), timeline.last_stop(p.id)) {
                    (Some(start), Some(completion)) => Ok(ProcessResult::new(p, start, completion)),
                    _ => Err(unfinished),
                }
            })
            .collect()
    }

    /// Computes batch-level metrics.
    ///
    /// An empty batch yields an all-zero summary.
    pub fn summarize(results: &[ProcessResult], timeline: &Timeline) -> ScheduleSummary {
        if results.is_empty() {
            return ScheduleSummary::default();
        }

        let count = results.len() as f64;
        let makespan = results.iter().map(|r| r.completion).max().unwrap_or(0);
        // Summed as f64: turnarounds near the clock limit overflow an i64 sum.
        let mean = |f: fn(&ProcessResult) -> i64| {
            results.iter().map(|r| f(r) as f64).sum::<f64>() / count
        };

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                count / makespan as f64,
                timeline.busy_time() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        ScheduleSummary {
            average_wait: mean(|r| r.wait),
            average_turnaround: mean(|r| r.turnaround),
            average_response: mean(|r| r.response),
            throughput,
            makespan,
            cpu_utilization,
            context_switches: timeline.context_switches(),
        }
    }

    /// Builds the full outcome for `algorithm`.
    pub fn finish(
        &self,
        algorithm: Algorithm,
        timeline: Timeline,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let results = self.results(&timeline)?;
        let summary = Self::summarize(&results, &timeline);
        Ok(ScheduleOutcome {
            algorithm,
            timeline,
            results,
            summary,
        })
    }
}
