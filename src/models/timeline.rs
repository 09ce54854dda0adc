//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU intervals a simulation produced,
//! i.e. the data behind a Gantt chart. With a single CPU, intervals never
//! overlap and are recorded in chronological order.

use serde::{Deserialize, Serialize};

/// One contiguous, uninterrupted run of a process on the CPU.
///
/// Covers `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub process_id: i64,
    /// First tick of the run.
    pub start: i64,
    /// Tick at which the run ended (exclusive).
    pub stop: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the run in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Chronological record of CPU intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval as a separate entry.
    ///
    /// Empty runs (`stop <= start`) are ignored.
    pub fn push(&mut self, process_id: i64, start: i64, stop: i64) {
        if stop <= start {
            return;
        }
        debug_assert!(
            self.intervals.last().is_none_or(|last| last.stop <= start),
            "intervals must be appended in chronological order"
        );
        self.intervals
            .push(ExecutionInterval::new(process_id, start, stop));
    }

    /// Appends a run, merging it into the last interval when the same
    /// process continues without a gap.
    pub fn extend(&mut self, process_id: i64, start: i64, stop: i64) {
        if stop <= start {
            return;
        }
        match self.intervals.last_mut() {
            Some(last) if last.process_id == process_id && last.stop == start => {
                last.stop = stop;
            }
            _ => self.push(process_id, start, stop),
        }
    }

    /// Returns a copy with back-to-back runs of the same process merged.
    pub fn coalesced(&self) -> Self {
        let mut merged = Self::new();
        for iv in &self.intervals {
            merged.extend(iv.process_id, iv.start, iv.stop);
        }
        merged
    }

    /// All intervals in chronological order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Intervals belonging to one process.
    pub fn for_process(&self, process_id: i64) -> impl Iterator<Item = &ExecutionInterval> {
        self.intervals
            .iter()
            .filter(move |iv| iv.process_id == process_id)
    }

    /// Total CPU time given to one process.
    pub fn service_time(&self, process_id: i64) -> i64 {
        self.for_process(process_id).map(|iv| iv.duration()).sum()
    }

    /// First instant a process got the CPU.
    pub fn first_start(&self, process_id: i64) -> Option<i64> {
        self.for_process(process_id).map(|iv| iv.start).min()
    }

    /// Instant a process left the CPU for the last time.
    pub fn last_stop(&self, process_id: i64) -> Option<i64> {
        self.for_process(process_id).map(|iv| iv.stop).max()
    }

    /// Latest stop across all intervals (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map(|iv| iv.stop).unwrap_or(0)
    }

    /// Ticks during which the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.duration()).sum()
    }

    /// Number of hand-overs between different processes.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing ever ran.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
