//! Deterministic CPU scheduling simulator.
//!
//! Replays what a single-CPU scheduler would do with a batch of processes
//! known in advance, and reports an execution timeline plus per-process
//! timing metrics. Four classical disciplines are provided: first-come
//! first-served, preemptive shortest-job-first, preemptive priority, and
//! round-robin.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `ProcessResult`,
//!   `ScheduleSummary`, `ScheduleOutcome`, `Algorithm`, `Quantum`
//! - **`scheduler`**: The four disciplines and the metrics accumulator
//! - **`dispatching`**: Selection rules and the rule engine used by the schedulers
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, arrivals)
//! - **`input`** / **`report`**: CSV loading and text rendering
//! - **`workload`**: Seeded random batches
//! - **`config`**: Command-line configuration
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Process, Quantum};
//! use cpu_schedule::scheduler;
//!
//! let processes = vec![
//!     Process::new(1, 5).with_priority(2),
//!     Process::new(2, 9).with_arrival(3).with_priority(1),
//!     Process::new(3, 6).with_arrival(6).with_priority(3),
//! ];
//! let outcomes = scheduler::run_all(&processes, Quantum::DEFAULT).unwrap();
//! assert_eq!(outcomes[0].completions(), vec![5, 14, 20]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, LoadError, ScheduleError};
