//! Preemptive burst-driven schedulers: SJF and priority-SJF.
//!
//! # Algorithm
//!
//! Both disciplines share one event-driven loop:
//!
//! 1. Select the best ready process with the discipline's rule chain.
//! 2. Run it until it completes or the next arrival, whichever is first.
//!    Only those two events can change the selection, so this matches a
//!    tick-by-tick simulation exactly.
//! 3. With nothing ready, jump the clock to the next arrival.
//!
//! Back-to-back runs of the same process merge into one interval.
//!
//! # Termination
//! Every iteration either runs a process for at least one tick or moves
//! the clock to a strictly later arrival.
//!
//! # Complexity
//! O(e * n) where e = arrivals + completions ≤ 2n.

use tracing::trace;

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Algorithm, Process, Timeline};

/// Preemptive shortest-remaining-time-first.
///
/// Ties on remaining time go to the process listed first.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestRemaining),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, processes: &[Process]) -> Timeline {
        simulate(&self.engine, processes)
    }
}

/// Preemptive priority scheduling with shortest-remaining tie-break.
///
/// A strictly lower priority number always wins; remaining time only
/// decides between equal priorities.
#[derive(Debug, Clone)]
pub struct PrioritySjf {
    engine: RuleEngine,
}

impl PrioritySjf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::HighestPriority)
                .with_tie_breaker(rules::ShortestRemaining),
        }
    }
}

impl Default for PrioritySjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PrioritySjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PrioritySjf
    }

    fn simulate(&self, processes: &[Process]) -> Timeline {
        simulate(&self.engine, processes)
    }
}

fn simulate(engine: &RuleEngine, processes: &[Process]) -> Timeline {
    let mut ctx = SchedulingContext::new(processes);
    let mut timeline = Timeline::new();
    let mut previous: Option<usize> = None;

    while ctx.unfinished() > 0 {
        let Some(current) = engine.select_best(processes, &ctx) else {
            match ctx.next_arrival(processes) {
                Some(arrival) => {
                    trace!(from = ctx.clock, until = arrival, "cpu idle");
                    ctx.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        if let Some(prev) = previous.filter(|&prev| prev != current && !ctx.is_finished(prev)) {
            trace!(
                at = ctx.clock,
                preempted = processes[prev].id,
                by = processes[current].id,
                "preemption"
            );
        }

        let until_arrival = ctx
            .next_arrival(processes)
            .map_or(i64::MAX, |arrival| arrival - ctx.clock);
        let slice = ctx.remaining(current).min(until_arrival);

        let start = ctx.clock;
        let left = ctx.run(current, slice);
        let pid = processes[current].id;
        timeline.extend(pid, start, ctx.clock);
        trace!(pid, start, stop = ctx.clock, left, "run");

        if left == 0 {
            trace!(pid, completion = ctx.clock, "completed");
        }
        previous = Some(current);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5).with_priority(2),
            Process::new(2, 9).with_arrival(3).with_priority(1),
            Process::new(3, 6).with_arrival(6).with_priority(3),
        ]
    }

    #[test]
    fn test_sjf_reference_batch() {
        let outcome = Sjf::new().schedule(&sample()).unwrap();
        // P1 is alone for ticks 0-2 and still shortest when P2 arrives.
        assert_eq!(
            outcome.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 5),
                ExecutionInterval::new(2, 5, 6),
                ExecutionInterval::new(3, 6, 12),
                ExecutionInterval::new(2, 12, 20),
            ]
        );
        assert_eq!(outcome.completions(), vec![5, 20, 12]);
        assert_eq!(outcome.waits(), vec![0, 8, 0]);
        assert!((outcome.summary.throughput - 3.0 / 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_preempts_on_shorter_arrival() {
        let processes = vec![Process::new(1, 8), Process::new(2, 2).with_arrival(1)];
        let outcome = Sjf::new().schedule(&processes).unwrap();
        assert_eq!(
            outcome.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 1),
                ExecutionInterval::new(2, 1, 3),
                ExecutionInterval::new(1, 3, 10),
            ]
        );
        assert_eq!(outcome.waits(), vec![2, 0]);
    }

    #[test]
    fn test_sjf_tie_keeps_running_process_on_equal_remaining() {
        // At t=2 P1 has 2 left and P2 arrives with 2: the first-listed wins.
        let processes = vec![Process::new(1, 4), Process::new(2, 2).with_arrival(2)];
        let timeline = Sjf::new().simulate(&processes);
        assert_eq!(
            timeline.intervals(),
            &[ExecutionInterval::new(1, 0, 4), ExecutionInterval::new(2, 4, 6)]
        );
    }

    #[test]
    fn test_sjf_tie_prefers_lower_index() {
        let processes = vec![Process::new(1, 2).with_arrival(2), Process::new(2, 4)];
        let timeline = Sjf::new().simulate(&processes);
        // At t=2 both have 2 remaining; index 0 (P1) wins the tie.
        assert_eq!(
            timeline.intervals(),
            &[
                ExecutionInterval::new(2, 0, 2),
                ExecutionInterval::new(1, 2, 4),
                ExecutionInterval::new(2, 4, 6),
            ]
        );
    }

    #[test]
    fn test_sjf_idles_until_first_arrival() {
        let processes = vec![Process::new(1, 3).with_arrival(4)];
        let outcome = Sjf::new().schedule(&processes).unwrap();
        assert_eq!(
            outcome.timeline.intervals(),
            &[ExecutionInterval::new(1, 4, 7)]
        );
        assert_eq!(outcome.waits(), vec![0]);
        assert!((outcome.summary.throughput - 1.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_reference_batch() {
        let outcome = PrioritySjf::new().schedule(&sample()).unwrap();
        assert_eq!(
            outcome.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 3),
                ExecutionInterval::new(2, 3, 12),
                ExecutionInterval::new(1, 12, 14),
                ExecutionInterval::new(3, 14, 20),
            ]
        );
        assert_eq!(outcome.completions(), vec![14, 12, 20]);
        assert_eq!(outcome.waits(), vec![9, 0, 8]);
    }

    #[test]
    fn test_priority_beats_shorter_remaining() {
        // P2 has less work left but a worse priority: P1 must keep the CPU.
        let processes = vec![
            Process::new(1, 6).with_priority(1),
            Process::new(2, 1).with_arrival(1).with_priority(4),
        ];
        let timeline = PrioritySjf::new().simulate(&processes);
        assert_eq!(
            timeline.intervals(),
            &[ExecutionInterval::new(1, 0, 6), ExecutionInterval::new(2, 6, 7)]
        );
    }

    #[test]
    fn test_priority_equal_uses_remaining() {
        let processes = vec![
            Process::new(1, 6).with_priority(1),
            Process::new(2, 2).with_arrival(1).with_priority(1),
        ];
        let timeline = PrioritySjf::new().simulate(&processes);
        assert_eq!(
            timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 1),
                ExecutionInterval::new(2, 1, 3),
                ExecutionInterval::new(1, 3, 8),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(Sjf::new().simulate(&[]).is_empty());
        assert!(PrioritySjf::new().schedule(&[]).unwrap().results.is_empty());
    }
}
