//! Random workload generation.
//!
//! Produces reproducible process batches for demonstrations and
//! property tests. Batches are sorted by arrival, ids run from 1, and
//! the first process always arrives at t=0.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time (inclusive).
    pub max_arrival: i64,
    /// Largest burst (inclusive, smallest is 1).
    pub max_burst: i64,
    /// Largest priority number (inclusive, smallest is 0).
    pub max_priority: i64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the arrival range.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the priority range.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Generates a valid, arrival-ordered batch.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut arrivals: Vec<i64> = (0..self.count)
            .map(|_| rng.random_range(0..=self.max_arrival.max(0)))
            .collect();
        arrivals.sort_unstable();
        if let Some(first) = arrivals.first_mut() {
            *first = 0;
        }

        arrivals
            .into_iter()
            .zip(1..)
            .map(|(arrival, id)| Process {
                id,
                arrival,
                burst: rng.random_range(1..=self.max_burst.max(1)),
                priority: rng.random_range(0..=self.max_priority.max(0)),
            })
            .collect()
    }
}
