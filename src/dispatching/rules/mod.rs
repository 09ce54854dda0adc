//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SRT (shortest remaining time)
//! - **Priority**: PRIORITY (lowest number first)
//! - **Queue**: FIFO (earliest arrival)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// Shortest Remaining Time.
///
/// Prioritizes the process closest to completion. Preemptive SJF is this
/// rule re-evaluated whenever the ready set changes.
///
/// # Reference
/// Schrage (1968), optimal for minimizing mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, index: usize, _process: &Process, context: &SchedulingContext) -> RuleScore {
        context.remaining(index)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Simple priority rule.
///
/// Prioritizes processes with lower `priority` numbers.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, _index: usize, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _index: usize, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
