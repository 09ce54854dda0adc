//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: a later rule is consulted only when every
//! earlier rule tied. Remaining ties keep input order, so the process that
//! appears first in the table wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::RuleEngine;
/// use cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::ShortestRemaining);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SRT"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only on ties of the rules before it.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the chained rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes; `Less` means `a` should run first.
    pub fn compare(
        &self,
        a: usize,
        b: usize,
        processes: &[Process],
        context: &SchedulingContext,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, &processes[a], context);
            let score_b = rule.evaluate(b, &processes[b], context);
            if score_a != score_b {
                return score_a.cmp(&score_b);
            }
        }
        Ordering::Equal
    }

    /// Returns the index of the best ready process.
    ///
    /// Processes are scanned in input order and the current best is only
    /// replaced by a strictly better one, so ties go to the lowest index.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        context.ready_indices(processes).reduce(|best, candidate| {
            if self.compare(candidate, best, processes, context) == Ordering::Less {
                candidate
            } else {
                best
            }
        })
    }

    /// Sorts every process (ready or not) by the rule chain.
    ///
    /// The sort is stable: ties keep input order.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(a, b, processes, context));
        indices
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
