//! Process model.
//!
//! A process is a single CPU burst that becomes ready at its arrival time.
//! Processes are immutable inputs: simulations track remaining burst in
//! their own state and never write back.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Tick at which the process becomes ready.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: i64, burst: i64) -> Self {
        Self {
            id,
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 5).with_arrival(3).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.burst, 5);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 4).with_arrival(3);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
        assert!(p.has_arrived(10));
    }
}
