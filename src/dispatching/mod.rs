//! Dispatching rules and rule engine for process selection.
//!
//! Provides the rules that decide which ready process gets the CPU next
//! (SRT, PRIORITY, FIFO) and a rule engine that chains them, each later
//! rule only breaking ties left by the earlier ones.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{RuleEngine, SchedulingContext};
//! use cpu_schedule::dispatching::rules;
//! use cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::HighestPriority)
//!     .with_tie_breaker(rules::ShortestRemaining);
//!
//! let processes = vec![
//!     Process::new(1, 2).with_priority(3),
//!     Process::new(2, 8).with_priority(1),
//! ];
//! let context = SchedulingContext::new(&processes);
//! assert_eq!(engine.select_best(&processes, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the process at `index` given the current simulation state.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, index: usize, process: &Process, context: &SchedulingContext)
        -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
