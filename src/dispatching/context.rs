//! Simulation state passed to dispatching rules.

use crate::models::Process;

/// Runtime scheduling state owned by one simulation run.
///
/// Holds the simulated clock and the remaining burst of every process,
/// indexed like the input slice. Each algorithm invocation creates its own
/// context; nothing is shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulated time (ticks).
    pub clock: i64,
    remaining: Vec<i64>,
}

impl SchedulingContext {
    /// Creates a context at t=0 with every burst still outstanding.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            clock: 0,
            remaining: processes.iter().map(|p| p.burst.max(0)).collect(),
        }
    }

    /// Overrides the remaining burst of one process.
    pub fn with_remaining(mut self, index: usize, remaining: i64) -> Self {
        self.remaining[index] = remaining;
        self
    }

    /// Remaining burst of the process at `index`.
    #[inline]
    pub fn remaining(&self, index: usize) -> i64 {
        self.remaining[index]
    }

    /// Whether the process at `index` has run to completion.
    #[inline]
    pub fn is_finished(&self, index: usize) -> bool {
        self.remaining[index] == 0
    }

    /// Whether the process has arrived and still needs the CPU.
    #[inline]
    pub fn is_ready(&self, index: usize, process: &Process) -> bool {
        process.has_arrived(self.clock) && !self.is_finished(index)
    }

    /// Indices of ready processes, in input order.
    pub fn ready_indices<'a>(
        &'a self,
        processes: &'a [Process],
    ) -> impl Iterator<Item = usize> + 'a {
        processes
            .iter()
            .enumerate()
            .filter(move |(i, p)| self.is_ready(*i, p))
            .map(|(i, _)| i)
    }

    /// Earliest arrival strictly after the clock among unfinished processes.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<i64> {
        processes
            .iter()
            .enumerate()
            .filter(|(i, p)| !self.is_finished(*i) && p.arrival > self.clock)
            .map(|(_, p)| p.arrival)
            .min()
    }

    /// Number of processes with work left.
    pub fn unfinished(&self) -> usize {
        self.remaining.iter().filter(|&&r| r > 0).count()
    }

    /// Gives the CPU to `index` for `ticks`, advancing the clock.
    ///
    /// Returns the remaining burst afterwards.
    pub fn run(&mut self, index: usize, ticks: i64) -> i64 {
        debug_assert!(ticks > 0 && ticks <= self.remaining[index]);
        self.remaining[index] -= ticks;
        self.clock += ticks;
        self.remaining[index]
    }

    /// Leaves the CPU idle until `time`.
    pub fn idle_until(&mut self, time: i64) {
        debug_assert!(time > self.clock);
        self.clock = time;
    }
}
